use bingo_bot::vote::{Period, VoteDb, VoteKind, VoteStats};

const GUILD: u64 = 1;
const OTHER_GUILD: u64 = 2;

fn db() -> VoteDb {
    VoteDb::new(":memory:").unwrap()
}

#[test]
fn test_cast_and_stats() {
    let db = db();
    db.cast(10, 99, GUILD, VoteKind::Good).unwrap();
    db.cast(11, 99, GUILD, VoteKind::Good).unwrap();
    db.cast(12, 99, GUILD, VoteKind::Bad).unwrap();

    let stats = db.stats(99, GUILD, Period::All).unwrap();
    assert_eq!(stats, VoteStats { good: 2, bad: 1 });
    assert_eq!(stats.total(), 3);
}

#[test]
fn test_revote_replaces_previous_vote() {
    let db = db();
    db.cast(10, 99, GUILD, VoteKind::Good).unwrap();
    db.cast(10, 99, GUILD, VoteKind::Bad).unwrap();

    assert_eq!(
        db.stats(99, GUILD, Period::All).unwrap(),
        VoteStats { good: 0, bad: 1 }
    );
    assert_eq!(db.history(10, GUILD, 20).unwrap().len(), 1);
}

#[test]
fn test_guilds_are_separate() {
    let db = db();
    db.cast(10, 99, GUILD, VoteKind::Good).unwrap();
    db.cast(10, 99, OTHER_GUILD, VoteKind::Bad).unwrap();

    assert_eq!(
        db.stats(99, GUILD, Period::All).unwrap(),
        VoteStats { good: 1, bad: 0 }
    );
    assert_eq!(
        db.stats(99, OTHER_GUILD, Period::Month).unwrap(),
        VoteStats { good: 0, bad: 1 }
    );
    assert_eq!(db.stats(5, GUILD, Period::All).unwrap(), VoteStats::default());
}

#[test]
fn test_leaderboard_order_and_limit() {
    let db = db();
    // 50: 2 good, 51: 2 good + 1 bad, 52: 1 good
    db.cast(1, 50, GUILD, VoteKind::Good).unwrap();
    db.cast(2, 50, GUILD, VoteKind::Good).unwrap();
    db.cast(1, 51, GUILD, VoteKind::Good).unwrap();
    db.cast(2, 51, GUILD, VoteKind::Good).unwrap();
    db.cast(3, 51, GUILD, VoteKind::Bad).unwrap();
    db.cast(1, 52, GUILD, VoteKind::Good).unwrap();

    let board = db.leaderboard(GUILD, Period::All, 10).unwrap();
    let order: Vec<u64> = board.iter().map(|e| e.target_id).collect();
    assert_eq!(order, vec![51, 50, 52]);
    assert_eq!(board[0].stats, VoteStats { good: 2, bad: 1 });

    let top = db.leaderboard(GUILD, Period::All, 2).unwrap();
    assert_eq!(top.len(), 2);

    assert!(db.leaderboard(OTHER_GUILD, Period::All, 10).unwrap().is_empty());
}

#[test]
fn test_history_only_own_votes() {
    let db = db();
    db.cast(10, 50, GUILD, VoteKind::Good).unwrap();
    db.cast(10, 51, GUILD, VoteKind::Bad).unwrap();
    db.cast(11, 50, GUILD, VoteKind::Bad).unwrap();

    let history = db.history(10, GUILD, 20).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|r| r.target_id == 50 || r.target_id == 51));

    let limited = db.history(10, GUILD, 1).unwrap();
    assert_eq!(limited.len(), 1);
}
