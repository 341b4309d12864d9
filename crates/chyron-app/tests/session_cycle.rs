//! End-to-end rotation behavior through the session: the banner cycle, the
//! structural-reset rule, and content-edit stability.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use chyron_app::TickerSession;
use chyron_core::{NewsItem, Phase, RotationTiming, TickerItem};

const DISPLAY: Duration = Duration::from_secs(5);
const TRANSITION: Duration = Duration::from_secs(1);

fn session_at(now: Instant) -> TickerSession {
    TickerSession::new(
        RotationTiming {
            display: DISPLAY,
            transition: TRANSITION,
        },
        now,
    )
}

fn shown_text(session: &TickerSession) -> Option<String> {
    session.frame().item.map(|item| match item {
        TickerItem::News(news) => news.text,
        TickerItem::Score(score) => score.league,
    })
}

#[test]
fn two_item_lineup_cycles_on_schedule() {
    let t0 = Instant::now();
    let session = session_at(t0);
    session.add(
        TickerItem::score(
            "NBA",
            "Lakers",
            "Warriors",
            time::macros::datetime!(2024-09-30 19:00 UTC),
            "Final score: 102-99",
        ),
        t0,
    );

    // The second add restarts the cycle; treat its instant as the origin.
    session.add(TickerItem::news("headline"), t0);

    assert_eq!(shown_text(&session).as_deref(), Some("NBA"));
    assert!(session.frame().visible);

    assert!(session.tick(t0 + Duration::from_secs(5)));
    assert!(!session.frame().visible);

    assert!(session.tick(t0 + Duration::from_secs(6)));
    assert_eq!(shown_text(&session).as_deref(), Some("headline"));
    assert!(session.frame().visible);

    assert!(session.tick(t0 + Duration::from_secs(11)));
    assert!(session.tick(t0 + Duration::from_secs(12)));
    assert_eq!(shown_text(&session).as_deref(), Some("NBA"));
}

#[test]
fn removing_the_last_item_idles_and_adding_restarts() {
    let t0 = Instant::now();
    let session = session_at(t0);
    let item = TickerItem::news("only");
    let id = item.id();
    session.add(item, t0);

    session.remove(id, t0 + Duration::from_secs(2));
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.frame().item, None);

    let later = t0 + Duration::from_secs(10);
    session.add(TickerItem::news("again"), later);
    assert_eq!(
        session.phase(),
        Phase::Visible {
            cursor: 0,
            until: later + DISPLAY
        }
    );
}

#[test]
fn content_update_of_the_visible_item_keeps_the_cycle() {
    let t0 = Instant::now();
    let session = session_at(t0);
    let item = TickerItem::news("draft headline");
    let id = item.id();
    session.add(item, t0);
    let phase_before = session.phase();

    session.update(
        TickerItem::News(NewsItem {
            id,
            text: "final headline".into(),
        }),
        t0 + Duration::from_secs(3),
    );

    assert_eq!(session.phase(), phase_before);
    assert_eq!(shown_text(&session).as_deref(), Some("final headline"));
}

#[test]
fn structural_edits_restart_from_the_head() {
    let t0 = Instant::now();
    let session = session_at(t0);
    session.add(TickerItem::news("a"), t0);
    session.add(TickerItem::news("b"), t0);
    session.tick(t0 + Duration::from_secs(5));
    session.tick(t0 + Duration::from_secs(6));
    assert_eq!(shown_text(&session).as_deref(), Some("b"));

    let later = t0 + Duration::from_secs(8);
    session.move_item(0, 1, later);
    assert_eq!(
        session.phase(),
        Phase::Visible {
            cursor: 0,
            until: later + DISPLAY
        }
    );
    assert_eq!(shown_text(&session).as_deref(), Some("b"));
}

#[test]
fn shrinking_during_the_fade_never_leaves_a_dangling_cursor() {
    let t0 = Instant::now();
    let session = session_at(t0);
    session.add(TickerItem::news("a"), t0);
    session.add(TickerItem::news("b"), t0);
    session.add(TickerItem::news("c"), t0);

    // Walk the cursor to the last item and into its fade.
    session.tick(t0 + Duration::from_secs(5));
    session.tick(t0 + Duration::from_secs(6));
    session.tick(t0 + Duration::from_secs(11));
    session.tick(t0 + Duration::from_secs(12));
    session.tick(t0 + Duration::from_secs(17));
    assert!(matches!(session.phase(), Phase::Hiding { cursor: 2, .. }));

    // Batch-delete the first two entries mid-fade; the engine restarts on
    // the (now one-element) sequence instead of advancing out of range.
    let when = t0 + Duration::from_millis(17500);
    session.remove_at(&BTreeSet::from([0, 1]), when);
    assert_eq!(
        session.phase(),
        Phase::Visible {
            cursor: 0,
            until: when + DISPLAY
        }
    );
    assert_eq!(shown_text(&session).as_deref(), Some("c"));
}

#[test]
fn dropping_the_session_detaches_cleanly() {
    let t0 = Instant::now();
    let session = session_at(t0);
    session.add(TickerItem::news("a"), t0);
    drop(session);
}
