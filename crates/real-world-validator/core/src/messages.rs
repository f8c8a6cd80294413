//! Built-in localized messages
//!
//! Each validator that emits field outcomes has a table with a `valid` and an
//! `invalid` text in Finnish, Swedish and English. Caller-supplied
//! `successMessage`/`errorMessage` always take precedence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Supported message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Fi,
    Sv,
    #[default]
    En,
}

impl Lang {
    /// Parse a two-letter language code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fi" => Some(Lang::Fi),
            "sv" => Some(Lang::Sv),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Parse a code, falling back to English for anything unsupported
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fi => "fi",
            Lang::Sv => "sv",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s)
            .ok_or_else(|| ValidationError::Config(format!("unsupported language code '{}'", s)))
    }
}

/// One message in every supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub fi: &'static str,
    pub sv: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Fi => self.fi,
            Lang::Sv => self.sv,
            Lang::En => self.en,
        }
    }
}

/// Default success and failure text for a field kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTable {
    pub valid: LocalizedText,
    pub invalid: LocalizedText,
}

impl MessageTable {
    /// Pick the message for an outcome
    ///
    /// The caller's override wins when present, otherwise the built-in text
    /// for `lang` is used.
    pub fn resolve(
        &self,
        ok: bool,
        success_message: Option<&str>,
        error_message: Option<&str>,
        lang: Lang,
    ) -> String {
        let (custom, builtin) = if ok {
            (success_message, &self.valid)
        } else {
            (error_message, &self.invalid)
        };
        match custom {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => builtin.get(lang).to_string(),
        }
    }
}

pub static PROPER_NAME: MessageTable = MessageTable {
    valid: LocalizedText {
        fi: "Nimi on kelvollinen.",
        sv: "Namnet är giltigt.",
        en: "The name is valid.",
    },
    invalid: LocalizedText {
        fi: "Nimen tulee alkaa isolla kirjaimella ja olla muodossa 'Esimerkki' tai 'Esimerkki-Esimerkki'.",
        sv: "Namnet måste börja med en stor bokstav och vara i formen 'Exempel' eller 'Exempel-Exempel'.",
        en: "The name must start with a capital letter and be in the form 'Example' or 'Example-Example'.",
    },
};

pub static EMAIL_ADDRESS: MessageTable = MessageTable {
    valid: LocalizedText {
        fi: "Sähköpostiosoite on kelvollinen.",
        sv: "E-postadressen är giltig.",
        en: "The email address is valid.",
    },
    invalid: LocalizedText {
        fi: "Sähköpostiosoitteen on oltava muodossa 'user@example.com'.",
        sv: "E-postadressen måste vara i formen 'user@example.com'.",
        en: "The email address must be in the form 'user@example.com'.",
    },
};

pub static PHONE_NUMBER: MessageTable = MessageTable {
    valid: LocalizedText {
        fi: "Puhelinnumero on kelvollinen.",
        sv: "Telefonnumret är giltigt.",
        en: "The phone number is valid.",
    },
    invalid: LocalizedText {
        fi: "Puhelinnumeron on oltava muodossa '+123123456789' (kolme numeroa maatunnus ja yhdeksän numeroa).",
        sv: "Telefonnumret måste vara i formen '+123123456789' (tre siffror landskod och nio siffror).",
        en: "The phone number must be in the format '+123123456789' (three-digit country code and nine digits).",
    },
};

pub static CHECKBOX_INPUT: MessageTable = MessageTable {
    valid: LocalizedText {
        fi: "Valintaruutu on valittu.",
        sv: "Kryssrutan är markerad.",
        en: "The checkbox is checked.",
    },
    invalid: LocalizedText {
        fi: "Tämä valintaruutu on pakollinen ja sen on oltava valittuna.",
        sv: "Den här kryssrutan är obligatorisk och måste vara markerad.",
        en: "This checkbox is required and must be checked.",
    },
};
