//! `quadrant survey` - one respondent walks the form in the terminal.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use quadrant_application::conversation::render;
use quadrant_application::conversation::{InlineButton, Keyboard, Reply, text_transition};
use quadrant_application::ResultService;
use quadrant_core::config::resolve_questions_limit;
use quadrant_core::locale::{CHOOSE_LANGUAGE, Locale};
use quadrant_core::question::AVATAR_EMOJIS;
use quadrant_core::record::SloganStyle;
use quadrant_core::survey::{
    CompletedSurvey, NicknamePolicy, Stage, SurveyFlow, SurveySession, Transition,
};

use crate::context::CliContext;
use crate::input::{LineSource, ReadlineSource};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, Default)]
pub struct SurveyOptions {
    pub locale: Option<Locale>,
    pub questions_limit: Option<usize>,
    pub slogan_style: Option<SloganStyle>,
    pub chart_url: String,
}

/// How a survey run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyRun {
    /// The respondent aborted before finishing; nothing was saved.
    Cancelled,
    Finished {
        survey: CompletedSurvey,
        saved: bool,
    },
}

pub async fn run(ctx: &CliContext, options: &SurveyOptions) -> Result<()> {
    let flow = Arc::new(SurveyFlow::new(
        resolve_questions_limit(
            options.questions_limit,
            false,
            ctx.settings.limits.questions_limit,
        ),
        ctx.settings.profile_limits(),
        NicknamePolicy::Strict,
    ));

    let mut input = ReadlineSource::new()?;
    let mut out = std::io::stdout();
    execute(flow, &ctx.results, options, &mut input, &mut out).await?;
    Ok(())
}

/// Runs one survey end to end and saves the result.
pub async fn execute<S, W>(
    flow: Arc<SurveyFlow>,
    results: &ResultService,
    options: &SurveyOptions,
    input: &mut S,
    out: &mut W,
) -> Result<SurveyRun>
where
    S: LineSource,
    W: Write,
{
    writeln!(out, "{}", Locale::En.messages().title.bright_magenta().bold())?;

    let hint = Locale::from_language_code(std::env::var("LANG").ok().as_deref());
    let locale = match options.locale {
        Some(locale) => locale,
        None => match choose_locale(hint, input, out)? {
            Some(locale) => locale,
            None => return cancelled(out),
        },
    };

    let mut session = SurveySession::new(flow, locale);
    session.start(locale);
    print_reply(out, &render::scale_intro(locale))?;

    let Some(survey) = walk(&mut session, input, out)? else {
        return cancelled(out);
    };

    let mut new_result = survey.to_new_result();
    if new_result.slogan.is_some() {
        new_result.slogan_style = options.slogan_style.clone();
    }

    let outcome = results.save(new_result).await;
    let reply = render::save_outcome(&outcome, survey.locale, results.is_remote_enabled());
    match &outcome {
        Ok(receipt) => {
            writeln!(out, "{}", reply.text.green())?;
            if let Some(left) = receipt.remaining_saves {
                writeln!(out, "{}", format!("({left} saves left on this device)").bright_black())?;
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Result not saved");
            writeln!(out, "{}", reply.text.red())?;
        }
    }
    print_reply(out, &render::summary(&survey, &options.chart_url))?;

    Ok(SurveyRun::Finished {
        survey,
        saved: outcome.is_ok(),
    })
}

fn cancelled<W: Write>(out: &mut W) -> Result<SurveyRun> {
    writeln!(out, "{}", "Survey cancelled.".yellow())?;
    Ok(SurveyRun::Cancelled)
}

/// Asks for a locale; an empty line picks `default`.
fn choose_locale<S, W>(default: Locale, input: &mut S, out: &mut W) -> Result<Option<Locale>>
where
    S: LineSource,
    W: Write,
{
    let labels: Vec<String> = Locale::ALL
        .iter()
        .map(|l| l.button_label().to_string())
        .collect();
    loop {
        writeln!(
            out,
            "{} {}",
            CHOOSE_LANGUAGE,
            format!("[{}] (default {})", labels.join("/"), default.button_label()).bright_black()
        )?;
        let Some(line) = input.read_line(PROMPT, &labels)? else {
            return Ok(None);
        };
        if line.trim().is_empty() {
            return Ok(Some(default));
        }
        if let Some(locale) = Locale::from_button(&line) {
            return Ok(Some(locale));
        }
    }
}

/// Drives a started session to completion.
///
/// # Returns
///
/// `None` if input ends before the survey is complete.
pub fn walk<S, W>(
    session: &mut SurveySession,
    input: &mut S,
    out: &mut W,
) -> Result<Option<CompletedSurvey>>
where
    S: LineSource,
    W: Write,
{
    let mut show_prompt = true;
    loop {
        if show_prompt {
            match session.stage() {
                Stage::Emoji => print_emoji_picker(out, session.locale())?,
                _ => print_reply(out, &render::stage_prompt(session))?,
            }
        }
        let suggestions = suggestions(session);
        let Some(line) = input.read_line(PROMPT, &suggestions)? else {
            return Ok(None);
        };

        let before = session.stage();
        match text_transition(session, &line) {
            Transition::Advanced { .. } => {
                if before == Stage::Questions {
                    print_preview(out, session)?;
                }
                show_prompt = true;
            }
            Transition::Ignored => {
                let messages = session.locale().messages();
                writeln!(out, "{}", messages.answer_out_of_range.yellow())?;
                show_prompt = false;
            }
            Transition::Rejected(err) => {
                for reply in render::validation_replies(&err, session) {
                    print_reply(out, &reply)?;
                }
                show_prompt = false;
            }
            Transition::Completed(survey) => return Ok(Some(survey)),
        }
    }
}

fn suggestions(session: &SurveySession) -> Vec<String> {
    match session.stage() {
        Stage::Questions => (1..=5).map(|v: u8| v.to_string()).collect(),
        Stage::Nickname | Stage::Slogan => {
            vec![session.locale().messages().skip_button.to_string()]
        }
        Stage::Emoji | Stage::NotStarted | Stage::Done => Vec::new(),
    }
}

const PICKER_COLUMNS: usize = 20;

/// The full avatar set, since a terminal cannot show a picker.
fn print_emoji_picker<W: Write>(out: &mut W, locale: Locale) -> Result<()> {
    writeln!(out, "{}", locale.messages().emoji_prompt)?;
    for row in AVATAR_EMOJIS.chunks(PICKER_COLUMNS) {
        writeln!(out, "  {}", row.join(" "))?;
    }
    Ok(())
}

/// Live score of the answers given so far.
fn print_preview<W: Write>(out: &mut W, session: &SurveySession) -> Result<()> {
    let locale = session.locale();
    let score = session.preview_score();
    writeln!(
        out,
        "{}",
        format!(
            "{}: X {:.1} · Y {:.1} · {}",
            locale.messages().your_position,
            score.x,
            score.y,
            score.quadrant.label(locale)
        )
        .bright_blue()
    )?;
    Ok(())
}

/// Prints a reply with its keyboard rendered as hints.
pub fn print_reply<W: Write>(out: &mut W, reply: &Reply) -> Result<()> {
    writeln!(out, "{}", reply.text)?;
    match &reply.keyboard {
        Keyboard::Unchanged | Keyboard::Remove => {}
        Keyboard::Choices(rows) => {
            let options: Vec<String> = rows.iter().flatten().map(|o| format!("[{o}]")).collect();
            writeln!(out, "  {}", options.join(" ").bright_black())?;
        }
        Keyboard::Inline(rows) => {
            let mut choices = Vec::new();
            for button in rows.iter().flatten() {
                match button {
                    InlineButton::Callback { label, .. } => choices.push(format!("[{label}]")),
                    InlineButton::Link { label, url } => {
                        writeln!(out, "  {}: {}", label, url.cyan())?;
                    }
                }
            }
            if !choices.is_empty() {
                writeln!(out, "  {}", choices.join(" ").bright_black())?;
            }
        }
    }
    Ok(())
}
