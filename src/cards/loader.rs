//! Card definition file parsing.
//!
//! Two files feed the registry: creature cards and spell cards.
//! Semicolon-separated lines, `#` comments, a header line starting with
//! `ID` that is skipped, ids case-normalized to uppercase.
//!
//! ```text
//! ID;Name;Mana;Attack;Health;Keyword, Keyword, ...
//! ID;Name;Mana;Category
//! ```
//!
//! Every defect is a fatal `ConfigError`; unlike user commands, card
//! files are trusted input and a bad line means a broken installation.

use std::fs;
use std::path::Path;

use crate::core::config::ConfigError;

use super::definition::{CardKind, CreatureStats, ManaCost, SpellCategory, SpellEffect};
use super::keywords::{Keyword, KeywordSet};
use super::registry::CardRegistry;

/// Parse creature card lines into the registry.
pub fn parse_creature_cards(text: &str, registry: &mut CardRegistry) -> Result<(), ConfigError> {
    for line in data_lines(text) {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 5 {
            return Err(ConfigError::Malformed(line.to_string()));
        }

        let code = fields[0].trim().to_uppercase();
        if code == "ID" {
            continue; // header line
        }
        let name = fields[1].trim();
        let cost = parse_cost(fields[2].trim())?;
        let attack = parse_stat(fields[3].trim())?;
        let health = parse_stat(fields[4].trim())?;
        let keywords = parse_keywords(fields.get(5).copied().unwrap_or(""))?;

        registry.register(
            code,
            name,
            cost,
            CardKind::Creature(CreatureStats {
                attack,
                health,
                keywords,
            }),
        );
    }
    Ok(())
}

/// Parse spell card lines into the registry.
///
/// The effect is resolved from the code here, once; the declared category
/// must agree with the effect's.
pub fn parse_spell_cards(text: &str, registry: &mut CardRegistry) -> Result<(), ConfigError> {
    for line in data_lines(text) {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 4 {
            return Err(ConfigError::Malformed(line.to_string()));
        }

        let code = fields[0].trim().to_uppercase();
        if code == "ID" {
            continue;
        }
        let name = fields[1].trim();
        let cost = parse_cost(fields[2].trim())?;
        let declared = fields[3].trim();

        let category = SpellCategory::parse(declared)
            .ok_or_else(|| ConfigError::Malformed(line.to_string()))?;
        let effect = SpellEffect::from_code(&code)
            .ok_or_else(|| ConfigError::UnknownSpell(code.clone()))?;
        if effect.category() != category {
            return Err(ConfigError::SpellCategoryMismatch {
                code,
                declared: declared.to_string(),
                actual: effect.category().name().to_string(),
            });
        }

        registry.register(code, name, cost, CardKind::Spell(effect));
    }
    Ok(())
}

/// Load both card files into a fresh registry.
pub fn load_registry(
    creature_path: impl AsRef<Path>,
    spell_path: impl AsRef<Path>,
) -> Result<CardRegistry, ConfigError> {
    let mut registry = CardRegistry::new();
    parse_creature_cards(&fs::read_to_string(creature_path)?, &mut registry)?;
    parse_spell_cards(&fs::read_to_string(spell_path)?, &mut registry)?;
    Ok(registry)
}

fn data_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

fn parse_cost(field: &str) -> Result<ManaCost, ConfigError> {
    if field.eq_ignore_ascii_case("X") {
        return Ok(ManaCost::Variable);
    }
    field
        .parse::<u32>()
        .map(ManaCost::Fixed)
        .map_err(|_| ConfigError::BadNumber(field.to_string()))
}

fn parse_stat(field: &str) -> Result<i32, ConfigError> {
    let value: i32 = field
        .parse()
        .map_err(|_| ConfigError::BadNumber(field.to_string()))?;
    if value < 0 {
        return Err(ConfigError::BadNumber(field.to_string()));
    }
    Ok(value)
}

fn parse_keywords(field: &str) -> Result<KeywordSet, ConfigError> {
    let mut keywords = KeywordSet::empty();
    for token in field.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let keyword =
            Keyword::parse(token).ok_or_else(|| ConfigError::UnknownKeyword(token.to_string()))?;
        keywords.insert(keyword);
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATURES: &str = "\
# comment line
ID;Name;Mana;ATK;HP;Traits
WOLFF;Lone Wolf;2;2;1;Haste
GOLEM;Stone Golem;5;3;7;
SNAKE;Pit Viper;3;2;2;Venomous, First Strike
";

    const SPELLS: &str = "\
ID;Name;Mana;Type
METOR;Meteor;6;General
SHOCK;Shock;1;Target
MEMRY;Fond Memories;X;Graveyard
";

    #[test]
    fn test_parse_creatures() {
        let mut registry = CardRegistry::new();
        parse_creature_cards(CREATURES, &mut registry).unwrap();

        assert_eq!(registry.len(), 3);

        let snake = registry.get_by_code("SNAKE").unwrap();
        let stats = snake.as_creature().unwrap();
        assert_eq!(stats.attack, 2);
        assert_eq!(stats.health, 2);
        assert!(stats.keywords.contains(Keyword::Venomous));
        assert!(stats.keywords.contains(Keyword::FirstStrike));

        let golem = registry.get_by_code("GOLEM").unwrap();
        assert!(golem.as_creature().unwrap().keywords.is_empty());
    }

    #[test]
    fn test_parse_spells() {
        let mut registry = CardRegistry::new();
        parse_spell_cards(SPELLS, &mut registry).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get_by_code("METOR").unwrap().as_spell(),
            Some(SpellEffect::Meteor)
        );
        assert_eq!(
            registry.get_by_code("MEMRY").unwrap().cost,
            ManaCost::Variable
        );
    }

    #[test]
    fn test_unknown_keyword_is_fatal() {
        let mut registry = CardRegistry::new();
        let text = "WOLFF;Wolf;2;2;1;Flying\n";
        let err = parse_creature_cards(text, &mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKeyword(k) if k == "Flying"));
    }

    #[test]
    fn test_unknown_spell_code_is_fatal() {
        let mut registry = CardRegistry::new();
        let text = "NOPES;Mystery;1;Target\n";
        let err = parse_spell_cards(text, &mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSpell(c) if c == "NOPES"));
    }

    #[test]
    fn test_category_mismatch_is_fatal() {
        let mut registry = CardRegistry::new();
        let text = "SHOCK;Shock;1;General\n";
        let err = parse_spell_cards(text, &mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::SpellCategoryMismatch { .. }));
    }

    #[test]
    fn test_malformed_line() {
        let mut registry = CardRegistry::new();
        let err = parse_creature_cards("WOLFF;Wolf;2\n", &mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn test_negative_stat_rejected() {
        let mut registry = CardRegistry::new();
        let err = parse_creature_cards("WOLFF;Wolf;2;-1;3;\n", &mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::BadNumber(_)));
    }
}
