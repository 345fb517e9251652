//! Currency formatting.
//!
//! A small, deterministic subset of locale-aware monetary formatting: symbol and
//! its placement, grouping and decimal separators, and two fraction digits.
//! Output matches the CLDR patterns the platform number formatters use, so the
//! default `es-PA`/`USD` pair reads `USD\u{a0}1,299.99`. Code-style symbols and
//! symbols after the amount are separated by a no-break space.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "es-PA")]
    EsPa,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "de-DE")]
    DeDe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::EsPa, Locale::EnUs, Locale::EsEs, Locale::DeDe];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EsPa => "es-PA",
            Locale::EnUs => "en-US",
            Locale::EsEs => "es-ES",
            Locale::DeDe => "de-DE",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Locale::ALL.iter().map(|l| l.tag()).collect();
                format!("Unknown locale '{}' (expected one of {})", s, known.join(", "))
            })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(format!("Unknown currency '{}' (expected USD or EUR)", other)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolved formatting rules for one locale/currency pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    symbol: &'static str,
    symbol_first: bool,
    /// A no-break space between a leading symbol and the number.
    spaced: bool,
    group: char,
    decimal: char,
    /// Integer digits needed before grouping kicks in (Spanish skips 4-digit amounts).
    min_grouping_digits: usize,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::new(Locale::default(), Currency::default())
    }
}

impl MoneyFormat {
    pub fn new(locale: Locale, currency: Currency) -> Self {
        let symbol = match (locale, currency) {
            (Locale::EsPa, _) => currency.code(),
            (_, Currency::Eur) => "€",
            (Locale::EsEs, Currency::Usd) => "US$",
            (_, Currency::Usd) => "$",
        };
        match locale {
            Locale::EsPa => Self {
                symbol,
                symbol_first: true,
                spaced: true,
                group: ',',
                decimal: '.',
                min_grouping_digits: 4,
            },
            Locale::EnUs => Self {
                symbol,
                symbol_first: true,
                spaced: false,
                group: ',',
                decimal: '.',
                min_grouping_digits: 4,
            },
            Locale::EsEs => Self {
                symbol,
                symbol_first: false,
                spaced: true,
                group: '.',
                decimal: ',',
                min_grouping_digits: 5,
            },
            Locale::DeDe => Self {
                symbol,
                symbol_first: false,
                spaced: true,
                group: '.',
                decimal: ',',
                min_grouping_digits: 4,
            },
        }
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return amount.to_string();
        }

        let fixed = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let negative = amount < 0.0;

        let mut number = self.group_digits(int_part);
        number.push(self.decimal);
        number.push_str(frac_part);

        let sign = if negative { "-" } else { "" };
        if self.symbol_first && self.spaced {
            format!("{}{}{}{}", sign, self.symbol, NBSP, number)
        } else if self.symbol_first {
            format!("{}{}{}", sign, self.symbol, number)
        } else {
            format!("{}{}{}{}", sign, number, NBSP, self.symbol)
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        if digits.len() < self.min_grouping_digits {
            return digits.to_string();
        }
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.group);
            }
            out.push(c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_panama_dollars() {
        let fmt = MoneyFormat::default();
        assert_eq!(fmt.format(1299.99), "USD\u{a0}1,299.99");
        assert_eq!(fmt.format(19.99), "USD\u{a0}19.99");
        assert_eq!(fmt.format(159.9), "USD\u{a0}159.90");
        assert_eq!(fmt.format(210.0), "USD\u{a0}210.00");
        assert_eq!(fmt.format(0.0), "USD\u{a0}0.00");
        assert_eq!(fmt.format(1_234_567.891), "USD\u{a0}1,234,567.89");
    }

    #[test]
    fn symbol_before_amount_locales() {
        let pa_eur = MoneyFormat::new(Locale::EsPa, Currency::Eur);
        assert_eq!(pa_eur.format(12.5), "EUR\u{a0}12.50");

        let us = MoneyFormat::new(Locale::EnUs, Currency::Usd);
        assert_eq!(us.format(1299.99), "$1,299.99");
        assert_eq!(us.format(-5.5), "-$5.50");
    }

    #[test]
    fn symbol_after_amount_locales() {
        let de = MoneyFormat::new(Locale::DeDe, Currency::Eur);
        assert_eq!(de.format(1299.99), "1.299,99\u{a0}€");

        let es = MoneyFormat::new(Locale::EsEs, Currency::Usd);
        assert_eq!(es.format(1299.99), "1299,99\u{a0}US$");
        assert_eq!(es.format(12345.5), "12.345,50\u{a0}US$");
    }

    #[test]
    fn negative_amounts_keep_a_leading_sign_even_when_rounded_to_zero() {
        let fmt = MoneyFormat::default();
        assert_eq!(fmt.format(-5.5), "-USD\u{a0}5.50");
        assert_eq!(fmt.format(-0.001), "-USD\u{a0}0.00");
        assert_eq!(fmt.format(-0.0), "USD\u{a0}0.00");
    }

    #[test]
    fn non_finite_values_are_passed_through() {
        assert_eq!(MoneyFormat::default().format(f64::NAN), "NaN");
    }

    #[test]
    fn parses_locale_and_currency_tags() {
        assert_eq!("es-pa".parse::<Locale>().unwrap(), Locale::EsPa);
        assert_eq!("de-DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert!("fr-FR".parse::<Locale>().is_err());
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("GBP".parse::<Currency>().is_err());
    }
}
