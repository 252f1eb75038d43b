//! Confusable-character folding data.
//!
//! Maps characters that render close enough to a Latin letter to pass for it
//! in a hostname. Curated from the Unicode confusables data, restricted to
//! lowercase codepoints that survive IDNA processing (uppercase and
//! compatibility forms are mapped away before a label reaches the checker).

pub(crate) static CONFUSABLES: &[(char, &str)] = &[
    // Cyrillic
    ('\u{0430}', "a"),  // а
    ('\u{0432}', "b"),  // в
    ('\u{0433}', "r"),  // г
    ('\u{0435}', "e"),  // е
    ('\u{043A}', "k"),  // к
    ('\u{043C}', "m"),  // м
    ('\u{043D}', "h"),  // н
    ('\u{043E}', "o"),  // о
    ('\u{043F}', "n"),  // п
    ('\u{0440}', "p"),  // р
    ('\u{0441}', "c"),  // с
    ('\u{0442}', "t"),  // т
    ('\u{0443}', "y"),  // у
    ('\u{0445}', "x"),  // х
    ('\u{044C}', "b"),  // ь
    ('\u{0455}', "s"),  // ѕ
    ('\u{0456}', "i"),  // і
    ('\u{0458}', "j"),  // ј
    ('\u{04BB}', "h"),  // һ
    ('\u{04CF}', "l"),  // ӏ (palochka)
    ('\u{04E9}', "o"),  // ө
    ('\u{0501}', "d"),  // ԁ
    ('\u{051B}', "q"),  // ԛ
    ('\u{051D}', "w"),  // ԝ
    ('\u{0461}', "w"),  // ѡ
    ('\u{0475}', "v"),  // ѵ
    ('\u{049D}', "e"),  // ҽ
    // Greek
    ('\u{03B1}', "a"),  // α
    ('\u{03B3}', "y"),  // γ
    ('\u{03B7}', "n"),  // η
    ('\u{03B9}', "i"),  // ι
    ('\u{03BA}', "k"),  // κ
    ('\u{03BD}', "v"),  // ν
    ('\u{03BF}', "o"),  // ο
    ('\u{03C1}', "p"),  // ρ
    ('\u{03C2}', "s"),  // ς
    ('\u{03C4}', "t"),  // τ
    ('\u{03C5}', "u"),  // υ
    ('\u{03C7}', "x"),  // χ
    ('\u{03C9}', "w"),  // ω
    ('\u{03F2}', "c"),  // ϲ (lunate sigma)
    ('\u{03F3}', "j"),  // ϳ
    // Armenian
    ('\u{0570}', "h"),  // հ
    ('\u{0578}', "n"),  // ո
    ('\u{057D}', "u"),  // ս
    ('\u{0585}', "o"),  // օ
    // Hebrew
    ('\u{05D5}', "i"),  // ו
    ('\u{05DF}', "l"),  // ן (final nun)
    // Latin additions and IPA
    ('\u{0131}', "i"),  // ı (dotless i)
    ('\u{0237}', "j"),  // ȷ (dotless j)
    ('\u{0251}', "a"),  // ɑ (latin alpha)
    ('\u{0261}', "g"),  // ɡ (script g)
    ('\u{0269}', "i"),  // ɩ (latin iota)
    ('\u{01BF}', "p"),  // ƿ (wynn)
];
