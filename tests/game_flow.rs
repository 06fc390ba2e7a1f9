use bingo_bot::bingo::{self, GameError, GameName, GameStatus, PlayerId};

const A: PlayerId = PlayerId(100);
const B: PlayerId = PlayerId(200);
const C: PlayerId = PlayerId(300);

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[tokio::test]
async fn test_create_join_start_mark_flow() {
    // A: /bingo_create G1, /bingo_addwords G1 a,b,c,d
    // B: /bingo_join G1 → 2x2 card
    // A: /bingo_start G1
    // B: /bingo_mark G1 a → marked, again → AlreadyMarked
    let games = bingo::new_games();
    let g1 = GameName::new("G1");

    {
        let mut reg = games.write().await;
        reg.create(g1.clone(), A).unwrap();
        let dim = reg
            .get_mut(&g1)
            .unwrap()
            .set_words(A, bingo::parse_words("a, b, c, d"))
            .unwrap();
        assert_eq!(dim, 2);
    }

    {
        let mut reg = games.write().await;
        let card = reg.get_mut(&g1).unwrap().join(B).unwrap().clone();
        assert_eq!(card.dimension(), 2);
        let mut got: Vec<&str> = card.words().collect();
        got.sort();
        assert_eq!(got, vec!["a", "b", "c", "d"]);
        assert_eq!(card.marked_count(), 0);
    }

    {
        let mut reg = games.write().await;
        reg.get_mut(&g1).unwrap().start(A).unwrap();
        assert_eq!(reg.get(&g1).unwrap().status(), GameStatus::Started);
    }

    let mut reg = games.write().await;
    let game = reg.get_mut(&g1).unwrap();
    assert_eq!(game.mark_word(B, "a"), Ok(false));
    assert_eq!(game.card(B).unwrap().marked_count(), 1);
    let (r, c) = game.card(B).unwrap().position_of("a").unwrap();
    assert!(game.card(B).unwrap().is_marked(r, c));
    assert_eq!(
        game.mark_word(B, "a"),
        Err(GameError::AlreadyMarked("a".to_string()))
    );
}

#[tokio::test]
async fn test_three_words_rejected() {
    let games = bingo::new_games();
    let name = GameName::new("odd");
    let mut reg = games.write().await;
    reg.create(name.clone(), A).unwrap();

    let game = reg.get_mut(&name).unwrap();
    assert_eq!(
        game.set_words(A, words(&["a", "b", "c"])),
        Err(GameError::InvalidWordCount(3))
    );
    assert_eq!(game.dimension(), 0);
    assert_eq!(game.join(B).err(), Some(GameError::InsufficientWords));
}

#[tokio::test]
async fn test_leave_rules_flow() {
    let games = bingo::new_games();
    let name = GameName::new("leave");
    let mut reg = games.write().await;
    let game = reg.create(name.clone(), A).unwrap();
    game.set_words(A, words(&["a"])).unwrap();
    game.join(B).unwrap();

    assert_eq!(game.leave(A), Err(GameError::CreatorCannotLeave));

    game.start(A).unwrap();
    assert_eq!(
        game.leave(B),
        Err(GameError::InvalidStatus(GameStatus::Started))
    );
    assert!(game.has_player(B));
}

#[tokio::test]
async fn test_start_without_players() {
    let games = bingo::new_games();
    let name = GameName::new("empty");
    let mut reg = games.write().await;
    let game = reg.create(name.clone(), A).unwrap();

    assert_eq!(game.start(A), Err(GameError::InsufficientPlayers));
    game.set_words(A, words(&["a", "b", "c", "d"])).unwrap();
    assert_eq!(game.start(A), Err(GameError::InsufficientPlayers));
}

#[tokio::test]
async fn test_full_game_to_bingo_and_finish() {
    let games = bingo::new_games();
    let name = GameName::new("full");
    let pool: Vec<String> = (1..=9).map(|i| i.to_string()).collect();

    {
        let mut reg = games.write().await;
        let game = reg.create(name.clone(), A).unwrap();
        game.set_words(A, pool).unwrap();
        game.join(B).unwrap();
        game.join(C).unwrap();
        game.regenerate_card(C).unwrap();
        game.start(A).unwrap();
    }

    let mut reg = games.write().await;
    let game = reg.get_mut(&name).unwrap();
    let column: Vec<String> = (0..3)
        .map(|r| game.card(B).unwrap().grid()[r][1].clone())
        .collect();

    assert_eq!(game.mark_word(B, &column[0]), Ok(false));
    assert_eq!(game.mark_word(B, &column[1]), Ok(false));
    assert_eq!(game.mark_word(B, &column[2]), Ok(true));
    assert_eq!(game.status(), GameStatus::Started);
    assert_eq!(game.winners(), vec![B]);

    // still playable after a win
    assert!(game.mark_word(C, "5").is_ok());

    assert_eq!(game.finish(B), Err(GameError::NotCreator));
    assert_eq!(game.finish(A), Ok(()));
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(
        game.mark_word(C, "1"),
        Err(GameError::InvalidStatus(GameStatus::Finished))
    );

    reg.cancel(&name, A).unwrap();
    assert!(reg.is_empty());
}

#[tokio::test]
async fn test_registries_are_isolated() {
    let first = bingo::new_games();
    let second = bingo::new_games();
    let name = GameName::new("shared");

    first.write().await.create(name.clone(), A).unwrap();
    assert!(second.write().await.create(name.clone(), B).is_ok());

    assert_eq!(first.read().await.get(&name).unwrap().creator(), A);
    assert_eq!(second.read().await.get(&name).unwrap().creator(), B);

    first.write().await.cancel(&name, A).unwrap();
    assert!(first.read().await.is_empty());
    assert_eq!(second.read().await.len(), 1);
}
