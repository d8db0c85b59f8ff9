//! Fixed reading texts.

use crate::vedic::types::{Planet, Sign};

pub const PLANETARY_PREAMBLE: &str = "Here are your planetary positions based on Vedic astrology:";

pub const REMEDY_PREAMBLE: &str = "Based on your Vedic birth chart, I recommend the following remedies:";

pub const CAREER: &str = "Your career path is influenced by multiple factors in your Vedic chart, particularly the 10th house, its ruler, and planets like Sun, Saturn and Jupiter. Based on your chart pattern, you may excel in fields that require analytical thinking, problem-solving abilities, and helping others.";

pub const RELATIONSHIP: &str = "Your relationship patterns are primarily shown by Venus, the 7th house, and the Moon in your Vedic chart. Your chart indicates you value intellectual connection and communication in relationships, and you seek a partner who can engage with you on multiple levels.";

pub const HEALTH: &str = "Health in Vedic astrology is seen through the 1st, 6th, and 8th houses, along with planets like Sun and Saturn. Your chart suggests paying attention to digestive health and stress management. Regular physical activity and mindfulness practices would be beneficial for your constitution.";

pub const FINANCE: &str = "Financial matters in your chart are governed by the 2nd, 11th houses and planets like Venus and Jupiter. Your chart indicates potential for steady income through multiple sources, with periods of financial growth especially during Jupiter's favorable transits.";

/// Remedies for the bodies that get one, in the order they are listed.
pub const PLANET_REMEDIES: &[(Planet, &str)] = &[
    (Planet::Saturn, "For Saturn: Wear a blue sapphire (neelam) on your middle finger on Saturday during Shani hora. Recite Shani mantras and donate black items on Saturdays."),
    (Planet::Mars, "For Mars: Wear a red coral (moonga) on your ring finger on Tuesday morning. Recite Hanuman Chalisa and Mars mantras. Donate red lentils on Tuesdays."),
    (Planet::Rahu, "For Rahu: Wear a hessonite (gomed) on your middle finger. Feed crows and donate dark blue or black items. Recite Durga mantras for protection."),
    (Planet::Ketu, "For Ketu: Wear a cat's eye (lehsunia) gemstone. Donate mixed grains to birds. Practice meditation and spiritual disciplines."),
];

pub const GENERAL_REMEDIES: [&str; 3] = [
    "Regular meditation and yoga practice helps balance planetary energies.",
    "Recite the Gayatri mantra daily for overall spiritual protection.",
    "Perform charity or seva (selfless service) to mitigate challenging planetary influences.",
];

/// What each house governs, indexed by house number - 1.
pub const HOUSE_MEANINGS: [&str; 12] = [
    "physical appearance, personality, and how others see you",
    "possessions, values, and financial matters",
    "communication, siblings, and short journeys",
    "home, family, and emotional foundation",
    "creativity, children, romance, and pleasure",
    "health, daily routine, and service to others",
    "partnerships, marriage, and open enemies",
    "transformation, joint resources, and the occult",
    "higher education, long journeys, and philosophy",
    "career, public standing, and authority",
    "friends, groups, and hopes and wishes",
    "spiritual growth, hidden matters, and self-undoing",
];

pub fn ascendant_trait(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "a dynamic and assertive personality with leadership qualities.",
        Sign::Taurus => "a grounded, practical and patient approach to life with an appreciation for beauty and comfort.",
        Sign::Gemini => "an intellectually curious and communicative nature with versatile interests.",
        Sign::Cancer => "an emotionally sensitive nature with strong nurturing instincts and attachment to home and family.",
        Sign::Leo => "a confident, creative and dignified personality with a need for recognition.",
        Sign::Virgo => "an analytical, detail-oriented and service-minded approach to life.",
        Sign::Libra => "a diplomatic and partnership-oriented nature with an appreciation for harmony and beauty.",
        Sign::Scorpio => "an intense, passionate and transformative personality with deep psychological insight.",
        Sign::Sagittarius => "an optimistic, philosophical and freedom-loving nature with interest in expanding horizons.",
        Sign::Capricorn => "an ambitious, disciplined and responsible personality focused on achievement.",
        Sign::Aquarius => "an innovative, independent and humanitarian nature with unique thinking patterns.",
        Sign::Pisces => "a compassionate, imaginative and spiritually sensitive personality with intuitive gifts.",
    }
}

/// Opening clause and linking verb for a planet reading.
pub fn planet_lead(planet: Planet) -> (&'static str, &'static str) {
    match planet {
        Planet::Sun => ("Your Sun", "indicates"),
        Planet::Moon => ("Your Moon", "suggests"),
        Planet::Mercury => ("Mercury", "shows"),
        Planet::Venus => ("Venus", "indicates"),
        Planet::Mars => ("Mars", "suggests"),
        Planet::Jupiter => ("Jupiter", "shows"),
        Planet::Saturn => ("Saturn", "indicates"),
        Planet::Rahu => ("Rahu (North Node)", "suggests"),
        Planet::Ketu => ("Ketu (South Node)", "shows"),
    }
}

const SUN_BY_HOUSE: [&str; 12] = [
    "strong leadership qualities and self-confidence.",
    "material security is important to your identity.",
    "strong communication skills and intellectual curiosity.",
    "a strong connection to home and family matters.",
    "creative self-expression and possibly children are central to your identity.",
    "service to others and health matters are important to you.",
    "relationships and partnerships are central to your sense of self.",
    "transformation and deep psychological understanding.",
    "a philosophical nature and interest in higher learning or spirituality.",
    "career ambitions and public recognition are important to you.",
    "social connections and humanitarian ideals shape your identity.",
    "spiritual growth and working behind the scenes.",
];

const MOON_BY_HOUSE: [&str; 12] = [
    "emotional sensitivity and your feelings are openly expressed.",
    "emotional security is tied to material possessions.",
    "your emotions are intellectualized and you communicate your feelings well.",
    "deep emotional connection to home and family.",
    "emotional fulfillment through creativity and children.",
    "emotional satisfaction through service and helping others.",
    "emotional fulfillment through relationships and partnerships.",
    "deep emotional transformations and psychological insights.",
    "emotional connection to philosophy, higher learning or spirituality.",
    "emotional fulfillment through career achievements.",
    "emotional connection to friends and social groups.",
    "rich inner emotional life and spiritual sensitivity.",
];

const MERCURY_BY_HOUSE: [&str; 12] = [
    "a quick, curious mind that shapes how others see you.",
    "a talent for earning through speech, trade and numbers.",
    "sharp communication skills and a restless intellectual curiosity.",
    "a thoughtful mind rooted in home, family and early learning.",
    "a playful, inventive intellect suited to creative and speculative work.",
    "a precise, analytical mind that excels at problem-solving and daily routines.",
    "a need for intellectual rapport and conversation in partnerships.",
    "a probing mind drawn to research, secrets and hidden subjects.",
    "a love of study, teaching and philosophical debate.",
    "success through communication, commerce or intellectual work in your career.",
    "a wide network of friends and gains through ideas and connections.",
    "an intuitive, private mind that thinks best in solitude.",
];

const VENUS_BY_HOUSE: [&str; 12] = [
    "natural charm, grace and an appreciation for beauty in how you present yourself.",
    "comfort with material pleasures and a gift for attracting resources.",
    "artistic expression in writing or speech and warm ties with siblings.",
    "a love of a beautiful home and a harmonious family life.",
    "romance, creativity and enjoyment play a central role in your life.",
    "devotion in service and a need for harmony at work.",
    "a strong desire for partnership and a graceful approach to relationships.",
    "intense attachments and benefits through shared resources.",
    "a love of culture, travel and spiritual ideals.",
    "success in careers connected with art, beauty or diplomacy.",
    "gains through friendships and a rich social life.",
    "a private, devotional love and a taste for retreat.",
];

const MARS_BY_HOUSE: [&str; 12] = [
    "a bold, energetic temperament and a strong drive to act.",
    "forceful speech and a determined approach to earning.",
    "courage, initiative and competitive energy in communication.",
    "strong will at home and energy spent protecting your foundations.",
    "competitive creativity and a passionate approach to romance.",
    "the strength to overcome rivals, illness and obstacles.",
    "passion and occasional friction in partnerships.",
    "an intense drive toward transformation and a fearless attitude toward crises.",
    "zeal for your beliefs and an adventurous spirit in travel.",
    "ambition and the drive to lead in your profession.",
    "energy directed at goals and gains through bold effort.",
    "hidden drive best spent on spiritual discipline and work behind the scenes.",
];

const JUPITER_BY_HOUSE: [&str; 12] = [
    "optimism, generosity and a wise, expansive personality.",
    "growth in wealth and wise, truthful speech.",
    "expansion through learning, writing and courageous effort.",
    "blessings through home, property and a supportive family.",
    "wisdom in creativity, good fortune with children and a gift for teaching.",
    "growth through service and an ability to overcome difficulties.",
    "a wise, supportive partner and growth through relationships.",
    "interest in the occult and protection during life's transformations.",
    "strong faith, good fortune and a love of higher learning.",
    "respect, advancement and ethical leadership in your career.",
    "abundant gains and a generous circle of friends.",
    "spiritual growth, charity and liberation as life themes.",
];

const SATURN_BY_HOUSE: [&str; 12] = [
    "a serious, disciplined nature and lessons in self-reliance.",
    "slow but steady accumulation of wealth through patience.",
    "perseverance in effort and measured communication.",
    "responsibilities at home and lessons about emotional security.",
    "delays in creative pursuits or with children, rewarded by patience.",
    "a strong capacity for hard work and endurance against opposition.",
    "commitment, duty and maturity in partnerships.",
    "longevity, endurance and lessons through transformation.",
    "a practical, disciplined approach to belief and higher learning.",
    "a steady career rise through effort, with authority earned over time.",
    "long-term gains and loyal, mature friendships.",
    "solitude, spiritual discipline and lessons about letting go.",
];

/// Reading for a planet in a house. Houses outside 1..=12 get the
/// planet's generic line.
pub fn planet_in_house(planet: Planet, house: u8) -> &'static str {
    let by_house = match planet {
        Planet::Sun => Some(&SUN_BY_HOUSE),
        Planet::Moon => Some(&MOON_BY_HOUSE),
        Planet::Mercury => Some(&MERCURY_BY_HOUSE),
        Planet::Venus => Some(&VENUS_BY_HOUSE),
        Planet::Mars => Some(&MARS_BY_HOUSE),
        Planet::Jupiter => Some(&JUPITER_BY_HOUSE),
        Planet::Saturn => Some(&SATURN_BY_HOUSE),
        Planet::Rahu | Planet::Ketu => None,
    };

    by_house
        .and_then(|table| table.get((house as usize).wrapping_sub(1)))
        .copied()
        .unwrap_or_else(|| planet_generic(planet))
}

pub fn planet_generic(planet: Planet) -> &'static str {
    match planet {
        Planet::Sun => "various influences on your personality and life path.",
        Planet::Moon => "various emotional patterns in your life.",
        Planet::Mercury => "particular communication and thinking patterns.",
        Planet::Venus => "specific patterns in relationships and what you value.",
        Planet::Mars => "how you assert yourself and your energy patterns.",
        Planet::Jupiter => "areas of growth, expansion and wisdom in your life.",
        Planet::Saturn => "areas of limitation, responsibility and life lessons.",
        Planet::Rahu => "desires and obsessions that drive your soul's growth.",
        Planet::Ketu => "areas of detachment and spiritual evolution.",
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 21st.
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(22), "22nd");
    }

    #[test]
    fn test_nodes_use_generic_line() {
        for house in 1..=12 {
            assert_eq!(planet_in_house(Planet::Rahu, house), planet_generic(Planet::Rahu));
            assert_eq!(planet_in_house(Planet::Ketu, house), planet_generic(Planet::Ketu));
        }
    }

    #[test]
    fn test_out_of_range_house_falls_back() {
        assert_eq!(planet_in_house(Planet::Sun, 0), planet_generic(Planet::Sun));
        assert_eq!(planet_in_house(Planet::Sun, 13), planet_generic(Planet::Sun));
        assert_eq!(planet_in_house(Planet::Sun, 10), SUN_BY_HOUSE[9]);
    }
}
