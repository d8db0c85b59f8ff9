//! Keyword dispatch from a chat message to a chart reading.

use crate::insight::templates::{self, ordinal};
use crate::vedic::types::{Chart, House, Planet, PlanetPosition};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SENDER_AI: &str = "ai";

const PLANETARY_KEYWORDS: &[&str] = &["planet", "position", "where"];
const REMEDY_KEYWORDS: &[&str] = &["remedy", "solution", "fix", "improve"];
const CAREER_KEYWORDS: &[&str] = &["career", "profession", "job", "work"];
const RELATIONSHIP_KEYWORDS: &[&str] = &["relationship", "marriage", "love", "partner"];
const HEALTH_KEYWORDS: &[&str] = &["health", "medical", "wellbeing"];
const FINANCE_KEYWORDS: &[&str] = &["finance", "money", "wealth", "financial"];

lazy_static::lazy_static! {
    // "10th house", "10 house", "house 10", "house 10th"
    static ref HOUSE_PATTERN: Regex =
        Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)?\s+house\b|\bhouse\s+(\d{1,2})(?:st|nd|rd|th)?\b").unwrap();
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Planetary,
    Remedy,
}

/// Which rule answered a message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Topic {
    PlanetaryPositions,
    Planet(Planet),
    House(u8),
    Remedies,
    Career,
    Relationship,
    Health,
    Finance,
    General,
}

/// A chat reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planetary_data: Option<Vec<PlanetPosition>>,
}

/// Reply body before it is stamped with an id and time.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub topic: Topic,
    pub content: String,
    pub response_type: Option<ResponseType>,
    pub planetary_data: Option<Vec<PlanetPosition>>,
}

impl Insight {
    fn text(topic: Topic, content: impl Into<String>) -> Self {
        Self {
            topic,
            content: content.into(),
            response_type: None,
            planetary_data: None,
        }
    }

    pub fn into_message(self, timestamp: DateTime<Utc>) -> InsightMessage {
        InsightMessage {
            id: Uuid::new_v4().to_string(),
            content: self.content,
            sender: SENDER_AI.to_string(),
            timestamp,
            response_type: self.response_type,
            planetary_data: self.planetary_data,
        }
    }
}

/// Answer `message` about `chart`.
pub fn respond(message: &str, chart: &Chart) -> InsightMessage {
    compose(message, chart).into_message(Utc::now())
}

/// First rule a message matched, holding the chart entry it refers to.
enum Rule<'a> {
    PlanetaryPositions,
    Planet(&'a PlanetPosition),
    House(&'a House),
    Remedies,
    Career,
    Relationship,
    Health,
    Finance,
    General,
}

impl Rule<'_> {
    fn topic(&self) -> Topic {
        match self {
            Rule::PlanetaryPositions => Topic::PlanetaryPositions,
            Rule::Planet(position) => Topic::Planet(position.planet),
            Rule::House(house) => Topic::House(house.number),
            Rule::Remedies => Topic::Remedies,
            Rule::Career => Topic::Career,
            Rule::Relationship => Topic::Relationship,
            Rule::Health => Topic::Health,
            Rule::Finance => Topic::Finance,
            Rule::General => Topic::General,
        }
    }
}

/// Order matters: a message naming both a planet and a house is answered
/// about the planet.
fn match_rule<'a>(message: &str, chart: &'a Chart) -> Rule<'a> {
    let text = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if mentions(PLANETARY_KEYWORDS) {
        return Rule::PlanetaryPositions;
    }

    // A named planet missing from the chart does not end the scan.
    if let Some(position) = Planet::ALL
        .into_iter()
        .filter(|p| text.contains(&p.name().to_lowercase()))
        .find_map(|p| chart.planet(p))
    {
        return Rule::Planet(position);
    }

    let referenced = referenced_houses(&text);
    if let Some(house) = (1..=12u8)
        .filter(|n| referenced.contains(n))
        .find_map(|n| chart.house(n))
    {
        return Rule::House(house);
    }

    if mentions(REMEDY_KEYWORDS) {
        Rule::Remedies
    } else if mentions(CAREER_KEYWORDS) {
        Rule::Career
    } else if mentions(RELATIONSHIP_KEYWORDS) {
        Rule::Relationship
    } else if mentions(HEALTH_KEYWORDS) {
        Rule::Health
    } else if mentions(FINANCE_KEYWORDS) {
        Rule::Finance
    } else {
        Rule::General
    }
}

/// Which rule answers `message` about `chart`.
pub fn classify(message: &str, chart: &Chart) -> Topic {
    match_rule(message, chart).topic()
}

/// Build the reply text for `message`.
pub fn compose(message: &str, chart: &Chart) -> Insight {
    let rule = match_rule(message, chart);
    let topic = rule.topic();
    log::debug!("chat message classified as {:?}", topic);

    match rule {
        Rule::PlanetaryPositions => Insight {
            topic,
            content: templates::PLANETARY_PREAMBLE.to_string(),
            response_type: Some(ResponseType::Planetary),
            planetary_data: Some(chart.planets.clone()),
        },
        Rule::Planet(position) => Insight::text(topic, planet_reading(position)),
        Rule::House(house) => Insight::text(topic, house_reading(house)),
        Rule::Remedies => Insight {
            topic,
            content: remedy_list(chart),
            response_type: Some(ResponseType::Remedy),
            planetary_data: None,
        },
        Rule::Career => Insight::text(topic, templates::CAREER),
        Rule::Relationship => Insight::text(topic, templates::RELATIONSHIP),
        Rule::Health => Insight::text(topic, templates::HEALTH),
        Rule::Finance => Insight::text(topic, templates::FINANCE),
        Rule::General => Insight::text(topic, general_reading(chart)),
    }
}

/// House numbers 1..=12 written in the message.
fn referenced_houses(text: &str) -> Vec<u8> {
    HOUSE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .filter_map(|m| m.as_str().parse::<u8>().ok())
        .filter(|n| (1..=12).contains(n))
        .collect()
}

pub fn planet_reading(position: &PlanetPosition) -> String {
    let (lead, verb) = templates::planet_lead(position.planet);
    format!(
        "{} in {} in the {} house {} {}",
        lead,
        position.sign,
        ordinal(position.house),
        verb,
        templates::planet_in_house(position.planet, position.house)
    )
}

pub fn house_reading(house: &House) -> String {
    let names: Vec<&str> = house.planets.iter().map(|p| p.planet.name()).collect();
    let occupants = if names.is_empty() {
        "no planets".to_string()
    } else {
        names.join(", ")
    };
    let meaning = templates::HOUSE_MEANINGS
        .get((house.number as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("various aspects of your life");

    let mut content = format!(
        "Your {} house is in {} with {}. This house represents {}.",
        ordinal(house.number),
        house.sign,
        occupants,
        meaning
    );
    if !names.is_empty() {
        content.push_str(&format!(
            " The presence of {} here emphasizes and influences these areas of your life.",
            names.join(", ")
        ));
    }
    content
}

pub fn remedy_list(chart: &Chart) -> String {
    let mut remedies: Vec<&str> = templates::PLANET_REMEDIES
        .iter()
        .filter(|(planet, _)| chart.planet(*planet).is_some())
        .map(|(_, remedy)| *remedy)
        .collect();
    remedies.extend(templates::GENERAL_REMEDIES);

    format!("{}\n\n• {}", templates::REMEDY_PREAMBLE, remedies.join("\n\n• "))
}

pub fn general_reading(chart: &Chart) -> String {
    let mut content = format!(
        "Your Vedic astrology chart has {} rising, which indicates {}",
        chart.ascendant,
        templates::ascendant_trait(chart.ascendant)
    );

    for position in &chart.planets {
        match position.planet {
            Planet::Moon => content.push_str(&format!(
                "\n\nYour Moon is in {} in the {} house, indicating your emotional nature and mind.",
                position.sign,
                ordinal(position.house)
            )),
            Planet::Sun => content.push_str(&format!(
                "\n\nYour Sun is in {} in the {} house, showing your core identity and vitality.",
                position.sign,
                ordinal(position.house)
            )),
            _ => {}
        }
    }
    content
}
