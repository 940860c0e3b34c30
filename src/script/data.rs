//! Cyrillic → Arabic-script (Töte) rule data.
//!
//! Single source of truth for the conversion direction shipped with this
//! crate. Word-keyed tables are `phf` maps (exact, case-folded keys);
//! per-character tables are plain slices, small enough that a linear probe
//! beats hashing.

use crate::script::{CharMap, PunctPair, ScriptEntry};
use phf::{Map, Set, phf_map, phf_set};

/// U+0674 ARABIC LETTER HIGH HAMZA — the glottal marker.
pub const HAMZA: char = '\u{0674}';

/// Proper nouns (people, places, institutions). Checked before any rule.
/// Multi-word keys are reachable only through phrase-level lookup.
static PROPER_NOUNS: Map<&'static str, &'static str> = phf_map! {
    "си" => "شي", "цзиньпин" => "جينپيڭ", "си цзиньпин" => "شي جينپيڭ",
    "ли цян" => "لي چياڭ", "ли" => "لي", "цян" => "چياڭ",
    "чжао лэцзи" => "جاۋ لىجي", "чжао" => "جاۋ", "лэцзи" => "لىجي",
    "ван хунин" => "ۋاڭ حۋنيڭ", "ван" => "ۋاڭ", "хунин" => "حۋنيڭ",
    "цай ци" => "ساي چي", "цай" => "ساي", "ци" => "چي",
    "дин сюэсян" => "ديڭ شۋەشياڭ", "дин" => "ديڭ", "сюэсян" => "شۋەشياڭ",
    "ли си" => "لي شي",
    "шужи" => "شۋجي",
    // Place names
    "қазақстан" => "قازاقستان", "алматы" => "الماتى", "астана" => "استانا",
    "шымкент" => "شىمكەنت", "жұңго" => "جۇڭگو",
    "чанцзян" => "چاڭجياڭ", "чанцзянның" => "چاڭجياڭنىڭ",
    "пекин" => "بەيجيڭ",
    // Institutions
    "орталық комитет" => "ورتالىق كوميتەت",
};

/// Words whose stored spelling is not derivable by rule: pre-baked marker,
/// compound-suffix harmony breaks, loanword vowel quirks.
static EXCEPTION_WORDS: Map<&'static str, &'static str> = phf_map! {
    "сөз" => "ٴسوز",
    "біздің" => "ٴبىزدىڭ",
    "отанымыз" => "وتانىمىز",
    "өте" => "ٴوتە",
    "көрікті" => "كورىكتى",
    "өмірімізді" => "ومىرىمىزدى",
    "өзгертеді" => "وزگەرتەدى",
    "білім" => "ٴبىلىم",
    "мен" => "مەن",
    "ғылым" => "عىلىم",
    "дамудың" => "دامۋدىڭ",
    "кілті" => "كىلتى",
    // Front-vowel words with no signal letter: marker is mandatory
    "бір" => "ٴبىر",
    "әр" => "ٴار",
    "іс" => "ٴىس",
    "өз" => "ٴوز",
    "үшін" => "ٴۇشىن",
    "тіл" => "ٴتىل",
    "өмір" => "ٴومىر",
    "әнші" => "ٴانشى",
    // Compounds whose first syllable is hard: no marker
    "баспасөз" => "باسپاسوز",
    // Mixed-harmony compounds (root and suffix disagree)
    "емхана" => "ەمحانا",
    "өнерпаз" => "ٴونەرپاز",
    "еңбекқор" => "ەڭبەكقور",
    "арбакеш" => "ارباكەش",
    "талапкер" => "تالاپكەر",
    "суретші" => "سۋرەتشى",
    "жауынгер" => "جاۋىنگەر",
    // Loanwords with irregular vowel renderings
    "бюджет" => "بۋدجەت",
    "диагноз" => "دىياگنوز",
    "токио" => "توكىيو",
    "тиісінше" => "تىيىسىنشە",
    // Front-then-back conjunction
    "бірақ" => "بىراق",
    "дәріхана" => "دارىحانا",
    "сияз" => "سىيەز",
    "қияр" => "قىيار",
    "экологиялық" => "ەكولوگىيالىق",
    // Hyphenated place name, checked as a whole run
    "нью-йорк" => "نىيۋ-يورك",
};

static CONSONANTS: &[CharMap] = &[
    CharMap { from: 'б', to: "ب" }, CharMap { from: 'Б', to: "ب" },
    CharMap { from: 'в', to: "ۆ" }, CharMap { from: 'В', to: "ۆ" },
    CharMap { from: 'г', to: "گ" }, CharMap { from: 'Г', to: "گ" },
    CharMap { from: 'ғ', to: "ع" }, CharMap { from: 'Ғ', to: "ع" },
    CharMap { from: 'д', to: "د" }, CharMap { from: 'Д', to: "د" },
    CharMap { from: 'ж', to: "ج" }, CharMap { from: 'Ж', to: "ج" },
    CharMap { from: 'з', to: "ز" }, CharMap { from: 'З', to: "ز" },
    CharMap { from: 'й', to: "ي" }, CharMap { from: 'Й', to: "ي" },
    CharMap { from: 'к', to: "ك" }, CharMap { from: 'К', to: "ك" },
    CharMap { from: 'қ', to: "ق" }, CharMap { from: 'Қ', to: "ق" },
    CharMap { from: 'л', to: "ل" }, CharMap { from: 'Л', to: "ل" },
    CharMap { from: 'м', to: "م" }, CharMap { from: 'М', to: "م" },
    CharMap { from: 'н', to: "ن" }, CharMap { from: 'Н', to: "ن" },
    CharMap { from: 'ң', to: "ڭ" }, CharMap { from: 'Ң', to: "ڭ" },
    CharMap { from: 'п', to: "پ" }, CharMap { from: 'П', to: "پ" },
    CharMap { from: 'р', to: "ر" }, CharMap { from: 'Р', to: "ر" },
    CharMap { from: 'с', to: "س" }, CharMap { from: 'С', to: "س" },
    CharMap { from: 'т', to: "ت" }, CharMap { from: 'Т', to: "ت" },
    CharMap { from: 'ф', to: "ف" }, CharMap { from: 'Ф', to: "ف" },
    CharMap { from: 'х', to: "ح" }, CharMap { from: 'Х', to: "ح" },
    CharMap { from: 'һ', to: "ھ" }, CharMap { from: 'Һ', to: "ھ" },
    CharMap { from: 'ч', to: "چ" }, CharMap { from: 'Ч', to: "چ" },
    CharMap { from: 'ш', to: "ش" }, CharMap { from: 'Ш', to: "ش" },
];

/// `и` is deliberately absent: the transcriber renders it positionally.
static VOWELS: &[CharMap] = &[
    CharMap { from: 'а', to: "ا" }, CharMap { from: 'А', to: "ا" },
    CharMap { from: 'ә', to: "ا" }, CharMap { from: 'Ә', to: "ا" },
    CharMap { from: 'е', to: "ە" }, CharMap { from: 'Е', to: "ە" },
    CharMap { from: 'о', to: "و" }, CharMap { from: 'О', to: "و" },
    CharMap { from: 'ө', to: "و" }, CharMap { from: 'Ө', to: "و" },
    CharMap { from: 'у', to: "ۋ" }, CharMap { from: 'У', to: "ۋ" },
    CharMap { from: 'ұ', to: "ۇ" }, CharMap { from: 'Ұ', to: "ۇ" },
    CharMap { from: 'ү', to: "ۇ" }, CharMap { from: 'Ү', to: "ۇ" },
    CharMap { from: 'ы', to: "ى" }, CharMap { from: 'Ы', to: "ى" },
    CharMap { from: 'і', to: "ى" }, CharMap { from: 'І', to: "ى" },
    CharMap { from: 'э', to: "ە" }, CharMap { from: 'Э', to: "ە" },
];

static COMBINATIONS: &[CharMap] = &[
    CharMap { from: 'ц', to: "تس" }, CharMap { from: 'Ц', to: "تس" },
    CharMap { from: 'щ', to: "شش" }, CharMap { from: 'Щ', to: "شش" },
    CharMap { from: 'ю', to: "يۋ" }, CharMap { from: 'Ю', to: "يۋ" },
    CharMap { from: 'я', to: "يا" }, CharMap { from: 'Я', to: "يا" },
    CharMap { from: 'ё', to: "يو" }, CharMap { from: 'Ё', to: "يو" },
];

static LOAN_CONSONANTS: &[char] = &['ф', 'Ф', 'в', 'В', 'ц', 'Ц', 'ч', 'Ч'];

static LOAN_SUFFIXES: &[&str] = &[
    "ция", "сия", "ия", "ология", "графия", "логия", "ика", "изм",
];

/// Native words whose initial `и` carries a front vowel, so the marker is
/// mandatory despite `и` being harmony-neutral.
static I_INITIAL_NATIVES: Set<&'static str> = phf_set! {
    "иіс", "ине", "ит", "ию", "иір", "иіл", "ирі", "иық", "ин",
};

/// Front-harmony numerals that prefix hard roots in compounds
/// (бесжылдық, екіжақты). The root's first vowel decides the word.
static SOFT_PREFIXES: &[&str] = &["бес", "екі", "жеті", "сегіз", "тоғыз"];

static FRONT_VOWELS: &[char] = &['ә', 'е', 'і', 'ө', 'ү'];

static BACK_VOWELS: &[char] = &['а', 'о', 'ұ', 'ы', 'у'];

/// Adjacency of any two of these marks a vowel hiatus. `у ю я ё` carry a
/// glide and are excluded.
static HIATUS_VOWELS: &[char] = &['а', 'ә', 'е', 'о', 'ө', 'ұ', 'ү', 'і', 'ы', 'и', 'э'];

/// Everything that resets the consonant-cluster counter.
static CLUSTER_VOWELS: &[char] = &[
    'а', 'ә', 'е', 'о', 'ө', 'ұ', 'ү', 'і', 'ы', 'и', 'э', 'у', 'ю', 'я', 'ё',
];

static HAMZA_SIGNALS_SRC: &[char] = &['к', 'г', 'е'];

static HAMZA_SIGNALS_DST: &[char] = &['ك', 'گ', 'ە'];

/// `. : !` are identity entries: listed as mapped symbols, rendered as-is.
static PUNCTUATION: &[PunctPair] = &[
    PunctPair { from: ',', to: '،' },
    PunctPair { from: '.', to: '.' },
    PunctPair { from: ':', to: ':' },
    PunctPair { from: ';', to: '؛' },
    PunctPair { from: '?', to: '؟' },
    PunctPair { from: '!', to: '!' },
];

/// The Cyrillic → Arabic-script direction shipped with this crate.
pub static CYR_TO_ARAB: ScriptEntry = ScriptEntry {
    hamza: HAMZA,
    proper_nouns: &PROPER_NOUNS,
    exception_words: &EXCEPTION_WORDS,
    consonants: CONSONANTS,
    vowels: VOWELS,
    combinations: COMBINATIONS,
    loan_consonants: LOAN_CONSONANTS,
    loan_suffixes: LOAN_SUFFIXES,
    i_initial_natives: &I_INITIAL_NATIVES,
    soft_prefixes: SOFT_PREFIXES,
    front_vowels: FRONT_VOWELS,
    back_vowels: BACK_VOWELS,
    hiatus_vowels: HIATUS_VOWELS,
    cluster_vowels: CLUSTER_VOWELS,
    hamza_signals_src: HAMZA_SIGNALS_SRC,
    hamza_signals_dst: HAMZA_SIGNALS_DST,
    punctuation: PUNCTUATION,
};
