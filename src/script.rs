pub mod data;

/// One row of a per-character transliteration table.
///
/// The target side is `&str` because several source letters expand to two
/// Arabic code units (`ц` → `تس`, `я` → `يا`).
#[derive(Clone, Copy, Debug)]
pub struct CharMap {
    pub from: char,
    pub to: &'static str,
}

/// One row of the punctuation table. Always 1→1.
#[derive(Clone, Copy, Debug)]
pub struct PunctPair {
    pub from: char,
    pub to: char,
}

/// The complete, frozen rule set for one conversion direction.
///
/// Everything in here is `'static` data published before `main` and never
/// mutated afterwards, so a single entry can be shared by any number of
/// concurrent callers without locking.
#[derive(Clone, Copy, Debug)]
pub struct ScriptEntry {
    /// The glottal marker prefixed by the post-processor (U+0674).
    pub hamza: char,
    /// Whole-word overrides: proper nouns, checked before everything else.
    pub proper_nouns: &'static phf::Map<&'static str, &'static str>,
    /// Whole-word overrides: words whose stored spelling is not derivable
    /// by rule (pre-baked marker, harmony-breaking suffixes, loanwords).
    pub exception_words: &'static phf::Map<&'static str, &'static str>,
    pub consonants: &'static [CharMap],
    /// Vowel map. Excludes `и`, which the transcriber handles positionally.
    pub vowels: &'static [CharMap],
    /// Letters that always expand via a fixed digraph (`ц щ ю я ё`).
    pub combinations: &'static [CharMap],
    /// Consonants that never occur in native vocabulary.
    pub loan_consonants: &'static [char],
    pub loan_suffixes: &'static [&'static str],
    /// Native words whose initial `и` stands for a front vowel.
    pub i_initial_natives: &'static phf::Set<&'static str>,
    /// Front-harmony numeral prefixes that may precede a hard root.
    pub soft_prefixes: &'static [&'static str],
    pub front_vowels: &'static [char],
    pub back_vowels: &'static [char],
    /// Vowels whose adjacency marks a hiatus (loanword phonotactics).
    pub hiatus_vowels: &'static [char],
    /// Vowels that reset the consonant-cluster counter.
    pub cluster_vowels: &'static [char],
    /// Source letters whose presence makes the marker redundant (`к г е`).
    pub hamza_signals_src: &'static [char],
    /// Their renderings in the target script (`ك گ ە`).
    pub hamza_signals_dst: &'static [char],
    pub punctuation: &'static [PunctPair],
}

impl ScriptEntry {
    #[inline]
    pub fn consonant(&self, c: char) -> Option<&'static str> {
        self.consonants.iter().find(|m| m.from == c).map(|m| m.to)
    }

    #[inline]
    pub fn vowel(&self, c: char) -> Option<&'static str> {
        self.vowels.iter().find(|m| m.from == c).map(|m| m.to)
    }

    #[inline]
    pub fn combination(&self, c: char) -> Option<&'static str> {
        self.combinations.iter().find(|m| m.from == c).map(|m| m.to)
    }

    #[inline]
    pub fn punctuation_for(&self, c: char) -> Option<char> {
        self.punctuation.iter().find(|p| p.from == c).map(|p| p.to)
    }

    #[inline(always)]
    pub fn is_front_vowel(&self, c: char) -> bool {
        self.front_vowels.contains(&c)
    }

    #[inline(always)]
    pub fn is_back_vowel(&self, c: char) -> bool {
        self.back_vowels.contains(&c)
    }

    #[inline(always)]
    pub fn is_loan_consonant(&self, c: char) -> bool {
        self.loan_consonants.contains(&c)
    }
}

/// Membership test for the source alphabet: the Russian Cyrillic block plus
/// the nine Kazakh additions. `ъ`/`ь` are included so the transcriber can
/// drop them inside a word instead of splitting the word at them.
#[inline(always)]
pub const fn is_source_letter(c: char) -> bool {
    matches!(c,
        'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'
        | 'ә' | 'Ә' | 'і' | 'І' | 'ң' | 'Ң'
        | 'ғ' | 'Ғ' | 'ү' | 'Ү' | 'ұ' | 'Ұ'
        | 'қ' | 'Қ' | 'ө' | 'Ө' | 'һ' | 'Һ')
}

/// Lowercase a single scalar. Every letter of the source alphabet lowercases
/// 1→1, so taking the first mapping char is exact; anything exotic falls
/// back to the input unchanged.
#[inline(always)]
pub fn lower_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}
