use amicus_core::{
    Assessment, CategoryKey, ChatSession, DayKey, FlixBrowser, MoodColor, MoodLedger, Sentiment,
    Tier, classify, content,
};
use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Text in, positive bundle out, mood logged for the day.
#[test]
fn test_happy_check_in_end_to_end() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let text = "I feel happy and excited";
    assert_eq!(classify(text), Sentiment::Positive);

    let mut session = ChatSession::new(now);
    let reply = session.submit(text, now, &mut rng).unwrap();
    assert_eq!(reply.sentiment, Some(Sentiment::Positive));
    assert_eq!(reply.suggestions.len(), 3);

    let declared = content::chat_responses().bundles_for(Sentiment::Positive);
    assert_eq!(declared.len(), 3);
    assert!(declared.iter().any(|b| b.message == reply.text));

    let mut ledger = MoodLedger::new();
    let today: DayKey = "2024-01-15".parse().unwrap();
    ledger.set_mood(today, MoodColor::Green);
    ledger.set_note(today, text);
    assert_eq!(ledger.statistics().green, 100);

    let cal = ledger.calendar_month(2024, 1).unwrap();
    assert_eq!(cal.days().filter(|(_, e)| e.is_some()).count(), 1);
}

/// Every tier is reachable from the standard bank.
#[test]
fn test_standard_assessment_reaches_every_tier() {
    let bank = Assessment::standard();
    let cases: [([u32; 5], Tier); 4] = [
        ([4, 4, 4, 4, 4], Tier::Excellent),
        ([3, 3, 3, 3, 3], Tier::Good),
        ([2, 2, 3, 2, 3], Tier::Moderate),
        ([1, 2, 1, 2, 1], Tier::NeedsAttention),
    ];
    for (answers, tier) in cases {
        assert_eq!(bank.score(&answers).unwrap().tier, tier, "{answers:?}");
    }
    assert_eq!(Tier::ALL.len(), cases.len());
}

/// Mood color drives both the calendar and the film shelf.
#[test]
fn test_mood_color_drives_flix() {
    let mut browser = FlixBrowser::new();
    browser.select(MoodColor::Red);
    let films = browser.visible(3);
    assert_eq!(films.len(), 3);
    assert!(films.iter().all(|f| f.rating.unwrap_or_default() >= 8.0));

    let title = films[0].title.clone().unwrap();
    assert!(browser.toggle_favorite(&title));
    assert!(browser.is_favorite("The Pursuit of Happyness"));
}
