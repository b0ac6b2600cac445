//! Built-in questionnaire: 15 social and 15 economic questions.

use super::model::{Axis, Question};

/// The full ordered questionnaire. Social questions come first.
pub static QUESTIONS: [Question; 30] = [
    Question::new(
        "s1",
        Axis::Social,
        "Чи має держава визначати, яку мораль та культурні норми просувати в суспільстві?",
        "Should the state define which morals and cultural norms to promote in society?",
    ),
    Question::new(
        "s2",
        Axis::Social,
        "Чи має держава контролювати зміст шкільної освіти (програми, підручники)?",
        "Should the state control school curricula and textbooks?",
    ),
    Question::new(
        "s3",
        Axis::Social,
        "Чи повинна держава встановлювати стандарти поведінки в сім’ї (виховання, ролі батьків)?",
        "Should the state set standards for family life (parental roles, upbringing)?",
    ),
    Question::new(
        "s4",
        Axis::Social,
        "Чи повинна держава регулювати релігійну діяльність та обмежувати «небезпечні» рухи?",
        "Should the state regulate religious activity and restrict “dangerous” movements?",
    ),
    Question::new(
        "s5",
        Axis::Social,
        "Чи має держава контролювати медіа та інтернет задля «соціальної стабільності»?",
        "Should the state control media and the internet for “social stability”?",
    ),
    Question::new(
        "s6",
        Axis::Social,
        "Чи повинна держава забезпечувати безпеку громадян навіть ціною обмеження приватності?",
        "Should the state ensure security even at the cost of limiting privacy?",
    ),
    Question::new(
        "s7",
        Axis::Social,
        "Чи має держава активно підтримувати спорт, дозвілля й культурні ініціативи бюджетом?",
        "Should the state actively fund sports, leisure, and cultural initiatives?",
    ),
    Question::new(
        "s8",
        Axis::Social,
        "Чи має держава керувати судовою системою централізовано?",
        "Should the state centrally control the judicial system?",
    ),
    Question::new(
        "s9",
        Axis::Social,
        "Чи має держава самостійно планувати та будувати інфраструктуру?",
        "Should the state exclusively plan and build infrastructure?",
    ),
    Question::new(
        "s10",
        Axis::Social,
        "Чи має держава контролювати армію та оборону як монополіст?",
        "Should the state monopolize control of the army and defense?",
    ),
    Question::new(
        "s11",
        Axis::Social,
        "Чи повинна держава встановлювати обов’язкові стандарти моралі та етики в публічному просторі?",
        "Should the state set mandatory moral and ethical standards in public life?",
    ),
    Question::new(
        "s12",
        Axis::Social,
        "Чи має держава встановлювати обов’язкову мовну політику (офіційні мови в освіті, медіа та держсекторі)?",
        "Should the state set mandatory language policy (official languages for education, media, and the public sector)?",
    ),
    Question::new(
        "s13",
        Axis::Social,
        "Чи повинна держава регулювати культурні події та мистецтво, відбираючи «безпечний» контент?",
        "Should the state regulate cultural events and art by selecting what is “safe” content?",
    ),
    Question::new(
        "s14",
        Axis::Social,
        "Чи має держава встановлювати загальнообов’язкові вимоги до вакцинацій і медичних втручань?",
        "Should the state set mandatory requirements for vaccinations and medical interventions?",
    ),
    Question::new(
        "s15",
        Axis::Social,
        "Чи повинна держава визначати норми поведінки в онлайн-просторі та обмежувати анонімність?",
        "Should the state define behavior norms online and limit anonymity?",
    ),
    Question::new(
        "e1",
        Axis::Economic,
        "Чи повинна держава встановлювати мінімальну зарплату?",
        "Should the state set a minimum wage?",
    ),
    Question::new(
        "e2",
        Axis::Economic,
        "Чи має держава контролювати тарифи на електроенергію, газ, воду?",
        "Should the state control utility tariffs (electricity, gas, water)?",
    ),
    Question::new(
        "e3",
        Axis::Economic,
        "Чи повинна держава обмежувати великі корпорації, щоб запобігати монополіям?",
        "Should the state limit large corporations to prevent monopolies?",
    ),
    Question::new(
        "e4",
        Axis::Economic,
        "Чи має держава встановлювати високі податки для фінансування соцпрограм?",
        "Should the state impose high taxes to fund social programs?",
    ),
    Question::new(
        "e5",
        Axis::Economic,
        "Чи повинна держава захищати місцевий бізнес митами?",
        "Should the state protect local business with tariffs?",
    ),
    Question::new(
        "e6",
        Axis::Economic,
        "Чи має держава контролювати банки й фінансові ринки?",
        "Should the state control banks and financial markets?",
    ),
    Question::new(
        "e7",
        Axis::Economic,
        "Чи повинна держава володіти природними ресурсами?",
        "Should the state own natural resources?",
    ),
    Question::new(
        "e8",
        Axis::Economic,
        "Чи має держава встановлювати обов’язкові стандарти якості товарів?",
        "Should the state set mandatory quality standards for all goods?",
    ),
    Question::new(
        "e9",
        Axis::Economic,
        "Чи повинна держава створювати державні підприємства?",
        "Should the state actively create state-owned enterprises?",
    ),
    Question::new(
        "e10",
        Axis::Economic,
        "Чи має держава регулювати ціни на ринку?",
        "Should the state regulate market prices?",
    ),
    Question::new(
        "e11",
        Axis::Economic,
        "Чи повинна держава адмініструвати та гарантувати пенсійну систему (накопичення, виплати)?",
        "Should the state administer and guarantee the pension system (contributions and payouts)?",
    ),
    Question::new(
        "e12",
        Axis::Economic,
        "Чи має держава контролювати емісію грошей і монетарну політику (центральний банк)?",
        "Should the state control money issuance and monetary policy (central bank)?",
    ),
    Question::new(
        "e13",
        Axis::Economic,
        "Чи повинна держава обмежувати або оподатковувати криптовалюти та альтернативні платіжні системи?",
        "Should the state restrict or tax cryptocurrencies and alternative payment systems?",
    ),
    Question::new(
        "e14",
        Axis::Economic,
        "Чи має держава встановлювати правила для орендних ставок і контролювати ринок житла?",
        "Should the state set rules on rent levels and control the housing market?",
    ),
    Question::new(
        "e15",
        Axis::Economic,
        "Чи повинна держава субсидіювати стратегічні галузі (енергетика, медицина, оборона) бюджетом?",
        "Should the state subsidize strategic industries (energy, healthcare, defense) with public funds?",
    ),
];

/// Emoji suggestions offered in the chat flow.
pub const EMOJI_SUGGESTIONS: [&str; 22] = [
    "😀", "😎", "🤖", "🐱", "🐶", "🐼", "🦊", "🦁", "🐸", "🦄", "🐢",
    "🐍", "🦕", "🦖", "🐧", "🦉", "🐙", "🦋", "🐝", "🐘", "🦒", "🐋",
];

/// Avatar emojis offered by the form front end.
pub const AVATAR_EMOJIS: [&str; 83] = [
    "👻", "💀", "☠️", "👽", "👾", "🤖", "🐶", "🐱", "🐭", "🐹",
    "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸",
    "🐵", "🙈", "🙉", "🙊", "🐒", "🦍", "🦧", "🐔", "🐧", "🐦",
    "🐤", "🐣", "🦇", "🐺", "🐗", "🦝", "🦨", "🦡", "🐴", "🫏",
    "🦓", "🦌", "🦬", "🐂", "🐃", "🐄", "🦙", "🦒", "🐪", "🐫",
    "🐘", "🦣", "🐁", "🐀", "🐇", "🦫", "🦔", "🦦", "🦥", "🐿️",
    "🦘", "🐉", "🦖", "🦕", "🐢", "🐍", "🦎", "🐟", "🐠", "🐡",
    "🦈", "🐬", "🐳", "🐋", "🦅", "🦆", "🦢", "🦜", "🦩", "🕊️",
    "🦉", "🦄", "🐲",
];
