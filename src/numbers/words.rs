//! Number-to-words renderer: Russian cardinals 0..=10000 with stress marks
//!
//! Numbers are decomposed by magnitude, most significant part first:
//! - 0..=20: irregular words from the base table
//! - tens: tens word plus an optional ones word
//! - hundreds and thousands: fixed phrases keyed by the leading digit,
//!   followed by the rendered remainder
//!
//! The thousands phrases carry the noun agreement ("ты́сяча" / "ты́сячи" /
//! "ты́сяч") as data rather than rules.

use super::range::MAX_SUPPORTED;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Base words: 0..=20 and the round tens up to 90
pub static NUMBER_WORDS: LazyLock<FxHashMap<u32, &'static str>> = LazyLock::new(|| {
    [
        (0, "ноль"),
        (1, "оди́н"),
        (2, "два"),
        (3, "три"),
        (4, "четы́ре"),
        (5, "пять"),
        (6, "шесть"),
        (7, "семь"),
        (8, "во́семь"),
        (9, "де́вять"),
        (10, "де́сять"),
        (11, "оди́ннадцать"),
        (12, "двена́дцать"),
        (13, "трина́дцать"),
        (14, "четы́рнадцать"),
        (15, "пятна́дцать"),
        (16, "шестна́дцать"),
        (17, "семна́дцать"),
        (18, "восемна́дцать"),
        (19, "девятна́дцать"),
        (20, "два́дцать"),
        (30, "три́дцать"),
        (40, "со́рок"),
        (50, "пятьдеся́т"),
        (60, "шестьдеся́т"),
        (70, "се́мьдесят"),
        (80, "во́семьдесят"),
        (90, "девяно́сто"),
    ]
    .into_iter()
    .collect()
});

/// Hundreds words indexed by the hundreds digit (index 0 unused)
const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "две́сти",
    "три́ста",
    "четы́реста",
    "пятьсо́т",
    "шестьсо́т",
    "семьсо́т",
    "восемьсо́т",
    "девятьсо́т",
];

/// Thousands phrases indexed by the thousands digit (index 0 unused)
const THOUSANDS: [&str; 10] = [
    "",
    "ты́сяча",
    "две ты́сячи",
    "три ты́сячи",
    "четы́ре ты́сячи",
    "пять ты́сяч",
    "шесть ты́сяч",
    "семь ты́сяч",
    "во́семь ты́сяч",
    "де́вять ты́сяч",
];

const TEN_THOUSAND: &str = "де́сять ты́сяч";

/// Dative zero, read after "равно́"
const ZERO_AS_ANSWER: &str = "нулю́";

/// Render `n` in Russian words. Values above 10000 come back as digits.
pub fn to_words(n: u32) -> String {
    match n {
        0..=20 => base_word(n),
        21..=99 => {
            let tens = base_word(n / 10 * 10);
            match n % 10 {
                0 => tens,
                ones => format!("{} {}", tens, base_word(ones)),
            }
        }
        100..=999 => with_remainder(HUNDREDS[(n / 100) as usize], n % 100),
        1000..=9999 => with_remainder(THOUSANDS[(n / 1000) as usize], n % 1000),
        MAX_SUPPORTED => TEN_THOUSAND.to_string(),
        _ => n.to_string(),
    }
}

/// Render `n` as it is read after "равно́": zero takes the dative form
pub fn to_words_as_answer(n: u32) -> String {
    if n == 0 {
        ZERO_AS_ANSWER.to_string()
    } else {
        to_words(n)
    }
}

fn base_word(n: u32) -> String {
    NUMBER_WORDS
        .get(&n)
        .map(|word| word.to_string())
        .unwrap_or_else(|| n.to_string())
}

fn with_remainder(head: &str, remainder: u32) -> String {
    if remainder == 0 {
        head.to_string()
    } else {
        format!("{} {}", head, to_words(remainder))
    }
}
