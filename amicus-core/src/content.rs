//! Built-in catalogs and the standard question bank.
//!
//! Each is constructed once, on first use, and shared for the life of the
//! process. Construction failures here mean the enums and the content tables
//! drifted apart; that is a programming error and panics.

use std::sync::LazyLock;

use crate::assessment::{Assessment, Question, Tier};
use crate::catalog::{Catalog, ContentBundle, MediaOrigin};
use crate::ledger::DayKey;
use crate::mood::MoodColor;
use crate::reviews::Review;
use crate::sentiment::Sentiment;

static CHAT_RESPONSES: LazyLock<Catalog<Sentiment>> = LazyLock::new(|| {
    Catalog::build("chat-responses", chat_entries()).expect("chat catalog covers every sentiment")
});

static DAILY_QUOTES: LazyLock<Catalog<Sentiment>> = LazyLock::new(|| {
    Catalog::build("daily-quotes", quote_entries()).expect("quote catalog covers every sentiment")
});

static MOOD_FLIX: LazyLock<Catalog<MoodColor>> = LazyLock::new(|| {
    Catalog::build("mood-flix", flix_entries()).expect("flix catalog covers every mood color")
});

static TIER_GUIDANCE: LazyLock<Catalog<Tier>> = LazyLock::new(|| {
    Catalog::build("tier-guidance", tier_entries()).expect("guidance covers every tier")
});

static STANDARD_ASSESSMENT: LazyLock<Assessment> = LazyLock::new(|| {
    Assessment::new(standard_questions()).expect("standard questions all have options")
});

pub fn chat_responses() -> &'static Catalog<Sentiment> {
    &CHAT_RESPONSES
}

pub fn daily_quotes() -> &'static Catalog<Sentiment> {
    &DAILY_QUOTES
}

pub fn mood_flix() -> &'static Catalog<MoodColor> {
    &MOOD_FLIX
}

pub fn tier_guidance() -> &'static Catalog<Tier> {
    &TIER_GUIDANCE
}

pub fn standard_assessment() -> &'static Assessment {
    &STANDARD_ASSESSMENT
}

fn chat_entries() -> Vec<(Sentiment, Vec<ContentBundle>)> {
    let with = |suggestions: [&'static str; 3]| {
        move |msg: &'static str| ContentBundle::new(msg).with_suggestions(suggestions)
    };

    let positive = with([
        "Consider journaling about what made today special",
        "Share your positive energy with someone you care about",
        "Take a moment to practice gratitude for these good feelings",
    ]);
    let negative = with([
        "Try some deep breathing exercises to center yourself",
        "Consider reaching out to a trusted friend or family member",
        "Remember that difficult emotions are temporary and valid",
    ]);
    let neutral = with([
        "Try a short mindfulness meditation",
        "Take a gentle walk in nature if possible",
        "Consider setting one small, achievable goal for tomorrow",
    ]);

    vec![
        (
            Sentiment::Positive,
            [
                "It's wonderful to hear the joy in your words! Your positive energy is truly inspiring.",
                "I can feel the happiness radiating from what you've shared. Keep embracing those beautiful moments!",
                "Your optimism is a gift not just to yourself, but to everyone around you. Thank you for sharing this brightness.",
            ]
            .map(positive)
            .to_vec(),
        ),
        (
            Sentiment::Negative,
            [
                "I hear you, and I want you to know that your feelings are completely valid. It takes courage to acknowledge difficult emotions.",
                "Thank you for trusting me with what you're going through. You're not alone in this, and it's okay to feel what you're feeling.",
                "I can sense the weight you're carrying right now. Remember that seeking support shows strength, not weakness.",
            ]
            .map(negative)
            .to_vec(),
        ),
        (
            Sentiment::Neutral,
            [
                "Thank you for sharing with me. Sometimes the quiet moments in between are just as important as the highs and lows.",
                "I appreciate you taking the time to reflect and share your thoughts. Every feeling deserves recognition and care.",
                "Your willingness to check in with yourself shows great self-awareness. That's a valuable skill for mental wellness.",
            ]
            .map(neutral)
            .to_vec(),
        ),
    ]
}

fn quote_entries() -> Vec<(Sentiment, Vec<ContentBundle>)> {
    vec![
        (
            Sentiment::Positive,
            [
                "Your positive energy is contagious! Keep shining bright.",
                "Happiness is a choice, and you're making it beautifully.",
                "Your joy creates ripples of positivity in the world.",
            ]
            .map(ContentBundle::new)
            .to_vec(),
        ),
        (
            Sentiment::Neutral,
            [
                "Every small step forward is progress worth celebrating.",
                "It's okay to have quiet moments. They help us grow.",
                "Balance is found in embracing both sunshine and storms.",
            ]
            .map(ContentBundle::new)
            .to_vec(),
        ),
        (
            Sentiment::Negative,
            [
                "Your feelings are valid, and you're stronger than you know.",
                "Healing happens one breath at a time. You're doing great.",
                "Tomorrow holds new possibilities for peace and joy.",
            ]
            .map(ContentBundle::new)
            .to_vec(),
        ),
    ]
}

fn film(title: &str, genre: &str, summary: &str, rating: f32, origin: MediaOrigin) -> ContentBundle {
    ContentBundle::new(summary)
        .with_title(title)
        .with_rating(rating)
        .with_media(genre, origin)
}

fn flix_entries() -> Vec<(MoodColor, Vec<ContentBundle>)> {
    use MediaOrigin::{Bollywood, Hollywood};

    vec![
        (
            MoodColor::Red,
            vec![
                film(
                    "The Pursuit of Happyness",
                    "Drama/Biography",
                    "A struggling salesman's journey of perseverance and hope, showing that even in darkest times, determination can lead to happiness.",
                    8.0,
                    Hollywood,
                ),
                film(
                    "Taare Zameen Par",
                    "Drama/Family",
                    "A heartwarming story about a special child and his teacher, celebrating uniqueness and the power of understanding.",
                    8.4,
                    Bollywood,
                ),
                film(
                    "Inside Out",
                    "Animation/Family",
                    "A beautiful exploration of emotions and mental health, showing how all feelings have their place in our lives.",
                    8.1,
                    Hollywood,
                ),
                film(
                    "Queen",
                    "Comedy/Drama",
                    "An empowering journey of self-discovery as a woman learns to embrace her independence and find her inner strength.",
                    8.1,
                    Bollywood,
                ),
                film(
                    "A Beautiful Mind",
                    "Drama/Biography",
                    "The inspiring story of overcoming mental health challenges through love, support, and personal resilience.",
                    8.2,
                    Hollywood,
                ),
            ],
        ),
        (
            MoodColor::Yellow,
            vec![
                film(
                    "The Grand Budapest Hotel",
                    "Comedy/Adventure",
                    "A whimsical and visually stunning comedy about friendship, loyalty, and the beauty in life's small moments.",
                    8.1,
                    Hollywood,
                ),
                film(
                    "3 Idiots",
                    "Comedy/Drama",
                    "A light-hearted yet meaningful story about friendship, following your passion, and not taking life too seriously.",
                    8.4,
                    Bollywood,
                ),
                film(
                    "Paddington",
                    "Family/Comedy",
                    "A charming and gentle film about kindness, family, and finding home in unexpected places.",
                    7.2,
                    Hollywood,
                ),
                film(
                    "Zindagi Na Milegi Dobara",
                    "Adventure/Comedy",
                    "Three friends on a road trip discovering life, friendship, and the importance of living in the moment.",
                    8.2,
                    Bollywood,
                ),
                film(
                    "Julie & Julia",
                    "Comedy/Drama",
                    "A feel-good story about finding passion and purpose through cooking and following your dreams.",
                    7.0,
                    Hollywood,
                ),
            ],
        ),
        (
            MoodColor::Green,
            vec![
                film(
                    "The Greatest Showman",
                    "Musical/Drama",
                    "An uplifting musical celebration of dreams, acceptance, and the power of believing in yourself.",
                    7.5,
                    Hollywood,
                ),
                film(
                    "Dangal",
                    "Sports/Biography",
                    "An inspiring story of determination, breaking barriers, and achieving greatness against all odds.",
                    8.4,
                    Bollywood,
                ),
                film(
                    "Chef",
                    "Comedy/Drama",
                    "A heartwarming story about rediscovering passion, family connections, and the joy of creating something you love.",
                    7.3,
                    Hollywood,
                ),
                film(
                    "Chhichhore",
                    "Comedy/Drama",
                    "A motivational story about friendship, perseverance, and finding success in failure.",
                    8.3,
                    Bollywood,
                ),
                film(
                    "Hidden Figures",
                    "Biography/Drama",
                    "An empowering story of brilliant women breaking barriers and achieving excellence in their field.",
                    7.8,
                    Hollywood,
                ),
            ],
        ),
    ]
}

fn tier_entries() -> Vec<(Tier, Vec<ContentBundle>)> {
    vec![
        (
            Tier::Excellent,
            vec![
                ContentBundle::new(
                    "You demonstrate strong mental health practices and resilience. You have healthy coping mechanisms and maintain good balance in your life.",
                )
                .with_title("Excellent Mental Wellness! 🌟")
                .with_suggestions([
                    "Continue your current self-care practices",
                    "Share your wellness strategies with others",
                    "Consider mentoring someone who might benefit from your experience",
                    "Stay mindful of maintaining this balance during challenging times",
                ]),
            ],
        ),
        (
            Tier::Good,
            vec![
                ContentBundle::new(
                    "You have a solid foundation for mental health with room for some improvements. You generally handle stress well but could benefit from fine-tuning certain areas.",
                )
                .with_title("Good Mental Wellness 😊")
                .with_suggestions([
                    "Focus on areas where you scored lower",
                    "Establish more consistent self-care routines",
                    "Practice mindfulness or meditation regularly",
                    "Strengthen your support network connections",
                ]),
            ],
        ),
        (
            Tier::Moderate,
            vec![
                ContentBundle::new(
                    "Your mental wellness is okay but there are several areas that could use attention. This is a good time to focus on building healthier habits and coping strategies.",
                )
                .with_title("Moderate Mental Wellness 💛")
                .with_suggestions([
                    "Prioritize sleep hygiene and regular sleep schedule",
                    "Engage in regular physical activity",
                    "Practice stress management techniques",
                    "Connect with supportive friends and family more often",
                    "Consider professional guidance if needed",
                ]),
            ],
        ),
        (
            Tier::NeedsAttention,
            vec![
                ContentBundle::new(
                    "It seems like you're going through a challenging time. Remember that seeking help is a sign of strength, and there are many resources available to support you.",
                )
                .with_title("Mental Wellness Needs Attention 🤗")
                .with_suggestions([
                    "Consider speaking with a mental health professional",
                    "Focus on basic self-care: sleep, nutrition, and gentle exercise",
                    "Reach out to trusted friends, family, or support groups",
                    "Practice daily mindfulness or breathing exercises",
                    "Be patient and gentle with yourself during this time",
                ]),
            ],
        ),
    ]
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question::new(1, "How often do you feel overwhelmed by daily stress?")
            .with_option("Rarely or never", 4)
            .with_option("Sometimes", 3)
            .with_option("Often", 2)
            .with_option("Almost always", 1),
        Question::new(2, "How well do you sleep at night?")
            .with_option("Very well - I feel rested", 4)
            .with_option("Pretty well most nights", 3)
            .with_option("Not great - I wake up tired", 2)
            .with_option("Poorly - I have trouble sleeping", 1),
        Question::new(3, "How connected do you feel to friends and family?")
            .with_option("Very connected and supported", 4)
            .with_option("Mostly connected", 3)
            .with_option("Somewhat isolated", 2)
            .with_option("Very isolated and alone", 1),
        Question::new(4, "How often do you engage in activities you enjoy?")
            .with_option("Regularly - I make time for hobbies", 4)
            .with_option("Sometimes when I can", 3)
            .with_option("Rarely - I'm usually too busy", 2)
            .with_option("Almost never", 1),
        Question::new(5, "How do you typically handle difficult emotions?")
            .with_option("I process them healthily and seek support", 4)
            .with_option("I usually work through them eventually", 3)
            .with_option("I struggle but try to cope", 2)
            .with_option("I feel overwhelmed and avoid them", 1),
    ]
}

/// Reviews shown on a board that has never been written to, newest first.
pub fn sample_reviews() -> Vec<Review> {
    let review = |id: u32,
                  name: &str,
                  rating: u8,
                  comment: &str,
                  (y, m, d): (i32, u32, u32),
                  helpful: u32| Review {
        id,
        name: name.to_string(),
        rating,
        comment: comment.to_string(),
        date: DayKey::from_ymd(y, m, d).expect("sample review dates are valid"),
        helpful,
    };
    vec![
        review(
            1,
            "Sarah M.",
            5,
            "Amicus has been a game-changer for my mental health journey. The AI responses are surprisingly empathetic and the mood tracking helps me understand my patterns better. The breathing exercises are my favorite!",
            (2024, 1, 15),
            12,
        ),
        review(
            2,
            "Alex K.",
            4,
            "Love the calming games, especially the Focus Bubble. It really helps me center myself during stressful days. The movie recommendations are spot-on too!",
            (2024, 1, 10),
            8,
        ),
        review(
            3,
            "Priya R.",
            5,
            "As someone dealing with anxiety, this app provides a safe space to express my feelings. The AI companion is non-judgmental and offers practical suggestions. Highly recommend!",
            (2024, 1, 8),
            15,
        ),
        review(
            4,
            "Michael T.",
            4,
            "The mental health quiz gave me insights I hadn't considered before. The personalized recommendations are helpful, though I'd love to see more games added in future updates.",
            (2024, 1, 5),
            6,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryKey;

    #[test]
    fn test_chat_bundles_have_three_suggestions() {
        for s in Sentiment::ALL {
            let bundles = chat_responses().bundles_for(*s);
            assert_eq!(bundles.len(), 3);
            for b in bundles {
                assert!(!b.message.is_empty());
                assert_eq!(b.suggestions.len(), 3);
            }
        }
    }

    #[test]
    fn test_flix_has_five_per_color() {
        for c in MoodColor::ALL {
            let films = mood_flix().bundles_for(*c);
            assert_eq!(films.len(), 5);
            assert!(films.iter().all(|f| f.title.is_some() && f.rating.is_some() && f.media.is_some()));
        }
        let first = &mood_flix().bundles_for(MoodColor::Green)[1];
        assert_eq!(first.title.as_deref(), Some("Dangal"));
        assert_eq!(first.rating, Some(8.4));
    }

    #[test]
    fn test_every_tier_has_guidance() {
        for t in Tier::ALL {
            let g = tier_guidance().pick_at(*t, 0);
            assert!(g.title.is_some());
            assert!(!g.suggestions.is_empty());
        }
    }

    #[test]
    fn test_quotes_three_each() {
        for s in Sentiment::ALL {
            assert_eq!(daily_quotes().bundles_for(*s).len(), 3);
        }
    }
}
