//! Closed grammatical categories of Slovene.
//!
//! Each category keeps the one-character code used by dictionary dumps and
//! persisted rows, plus the English name found in source XML. `from_code`
//! accepts either spelling and returns `None` for blank or unknown input so
//! partially filled dictionary rows parse into absent features instead of
//! failing.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

macro_rules! coded_category {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($code:literal, $xml:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn xml_code(&self) -> &'static str {
                match self {
                    $($name::$variant => $xml),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                if code.trim().is_empty() {
                    return None;
                }
                match code {
                    $($code | $xml => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.xml_code())
            }
        }
    };
}

coded_category! {
    /// The six Slovene cases, numbered the traditional way.
    Case {
        Nominative => ("1", "nominative"),
        Genitive => ("2", "genitive"),
        Dative => ("3", "dative"),
        Accusative => ("4", "accusative"),
        Locative => ("5", "locative"),
        Instrumental => ("6", "instrumental"),
    }
}

coded_category! {
    Gender {
        Masculine => ("M", "masculine"),
        Feminine => ("F", "feminine"),
        Neuter => ("N", "neuter"),
    }
}

coded_category! {
    /// Slovene keeps the dual alongside singular and plural.
    GrammaticalNumber {
        Singular => ("1", "singular"),
        Dual => ("2", "dual"),
        Plural => ("3", "plural"),
    }
}

coded_category! {
    Person {
        First => ("1", "first"),
        Second => ("2", "second"),
        Third => ("3", "third"),
    }
}

coded_category! {
    Degree {
        Positive => ("P", "positive"),
        Comparative => ("C", "comparative"),
        Superlative => ("S", "superlative"),
    }
}

coded_category! {
    Definiteness {
        Indefinite => ("0", "no"),
        Definite => ("1", "yes"),
    }
}

coded_category! {
    /// Finite and non-finite verb forms carried by dictionary entries.
    VerbalForm {
        Infinitive => ("I", "infinitive"),
        Supine => ("S", "supine"),
        Participle => ("P", "participle"),
        Present => ("R", "present"),
        Imperative => ("M", "imperative"),
    }
}

coded_category! {
    Transitivity {
        Transitive => ("T", "transitive"),
        Intransitive => ("I", "intransitive"),
        Ambitransitive => ("A", "ambitransitive"),
    }
}

coded_category! {
    Aspect {
        Perfective => ("P", "perfective"),
        Imperfective => ("I", "progressive"),
        Biaspectual => ("*", "biaspectual"),
    }
}

coded_category! {
    NumeralKind {
        Cardinal => ("C", "cardinal"),
        Ordinal => ("O", "ordinal"),
    }
}
