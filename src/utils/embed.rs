use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::bingo::{GameSession, GameStatus, PlayerCard};
use crate::utils::card;
use crate::vote::{LeaderboardEntry, Period, VoteRecord, VoteStats};

const BLUE: u32 = 0x5865F2;
const GREEN: u32 = 0x57F287;
const YELLOW: u32 = 0xFEE75C;
const ORANGE: u32 = 0xFF9900;
const RED: u32 = 0xED4245;
const GOLD: u32 = 0xF1C40F;

const FIELD_LIMIT: usize = 1024;
const DESCRIPTION_LIMIT: usize = 4096;

pub fn error(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ 오류")
        .description(message)
        .color(RED)
}

pub fn success(message: &str) -> CreateEmbed {
    CreateEmbed::new().description(format!("✅ {message}")).color(GREEN)
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Preparing => "⏳ 준비 중",
        GameStatus::Started => "🎮 진행 중",
        GameStatus::Finished => "🏁 종료됨",
    }
}

fn player_list(game: &GameSession, limit: usize) -> String {
    let players: Vec<String> = game.players().map(|id| format!("• {}", id.mention())).collect();
    if players.is_empty() {
        "아직 참가자가 없습니다".to_string()
    } else {
        fit_lines(&players, limit)
    }
}

/// Joins `lines` with newlines, cutting the tail to a "• ... 외 N명" line once
/// the text would pass `limit` chars.
fn fit_lines(lines: &[String], limit: usize) -> String {
    let joined = lines.join("\n");
    if joined.chars().count() <= limit {
        return joined;
    }

    let more = |n: usize| format!("• ... 외 {n}명");
    let mut out = String::new();
    let mut used = 0;
    let mut taken = 0;
    for line in lines {
        let len = line.chars().count() + usize::from(taken > 0);
        let rest = more(lines.len() - taken - 1).chars().count() + 1;
        if used + len + rest > limit {
            break;
        }
        if taken > 0 {
            out.push('\n');
        }
        out.push_str(line);
        used += len;
        taken += 1;
    }

    if taken > 0 {
        out.push('\n');
    }
    out.push_str(&more(lines.len() - taken));
    out
}

pub fn lobby(game: &GameSession) -> CreateEmbed {
    let color = if game.status() == GameStatus::Preparing {
        GREEN
    } else {
        YELLOW
    };

    CreateEmbed::new()
        .title(format!("🎯 빙고 로비: {}", game.name()))
        .color(color)
        .field("상태", status_label(game.status()), true)
        .field("생성자", game.creator().mention(), true)
        .field("참가자 수", game.player_count().to_string(), true)
        .field("참가자", player_list(game, FIELD_LIMIT), false)
        .field("단어 수", format!("{}개", game.words().len()), true)
}

pub fn game_view(game: &GameSession) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🎮 빙고 진행 중: {}", game.name()))
        .color(GREEN)
        .field("상태", status_label(game.status()), true)
        .field("생성자", game.creator().mention(), true)
        .field("참가자 수", game.player_count().to_string(), true)
        .field("참가자", player_list(game, FIELD_LIMIT), false)
        .field("사용법", "아래 버튼으로 카드를 보고 단어를 표시하세요", false)
}

pub fn game_status(game: &GameSession) -> CreateEmbed {
    let winners: Vec<String> = game
        .winners()
        .iter()
        .map(|id| format!("• {}", id.mention()))
        .collect();
    let mut embed = CreateEmbed::new()
        .title(format!("📊 게임 상태: {}", game.name()))
        .color(BLUE)
        .field("상태", status_label(game.status()), true)
        .field("참가자 수", game.player_count().to_string(), true)
        .field("단어 수", game.words().len().to_string(), true)
        .field("참가자", player_list(game, FIELD_LIMIT), false);

    if !winners.is_empty() {
        embed = embed.field("🎉 빙고", fit_lines(&winners, FIELD_LIMIT), false);
    }
    embed
}

pub fn finished(game: &GameSession) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🏁 게임 종료: {}", game.name()))
        .description("생성자가 게임을 종료했습니다. 참가해주셔서 감사합니다!")
        .color(ORANGE)
        .field("참가자", player_list(game, FIELD_LIMIT), false)
}

pub fn cancelled(game: &GameSession) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("❌ 게임 취소: {}", game.name()))
        .description("생성자가 게임을 취소했습니다.")
        .color(RED)
}

pub fn game_list<'a>(games: impl Iterator<Item = &'a GameSession>) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title("🎲 빙고 게임 목록").color(BLUE);
    let mut count = 0;
    for game in games.take(25) {
        embed = embed.field(
            game.name().as_str(),
            format!(
                "상태: {}\n생성자: {}\n참가자: {}명",
                status_label(game.status()),
                game.creator().mention(),
                game.player_count()
            ),
            false,
        );
        count += 1;
    }
    if count == 0 {
        embed = embed.description("진행 중인 빙고 게임이 없습니다.");
    }
    embed
}

pub fn participants(game: &GameSession) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("👥 `{}` 참가자", game.name()))
        .description(player_list(game, DESCRIPTION_LIMIT))
        .color(GREEN)
}

/// Embed showing a player's card, rendered as text.
pub fn card(title: &str, player_card: &PlayerCard) -> CreateEmbed {
    let n = player_card.dimension();
    CreateEmbed::new()
        .title(title)
        .description(card::render(player_card))
        .color(BLUE)
        .footer(CreateEmbedFooter::new(format!(
            "{n}x{n} · 표시 {}/{}",
            player_card.marked_count(),
            n * n
        )))
}

pub fn vote_stats(name: &str, stats: VoteStats, period: Period) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("📊 {name} 님의 투표 통계"))
        .description(format!("기간: **{period}**"))
        .color(BLUE)
        .field("👍 좋아요", format!("**{}**표", stats.good), true)
        .field("👎 싫어요", format!("**{}**표", stats.bad), true)
        .field("📈 합계", format!("**{}**표", stats.total()), true);

    if let Some(ratio) = stats.good_ratio() {
        embed = embed.field("✨ 호감도", format!("**{ratio:.1}%**"), false);
    }
    embed.footer(CreateEmbedFooter::new("💡 투표 통계는 관리자만 볼 수 있습니다"))
}

fn medal(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("**{n}.**"),
    }
}

pub fn leaderboard(entries: &[LeaderboardEntry], period: Period) -> CreateEmbed {
    let mut description = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let ratio = entry.stats.good_ratio().unwrap_or(0.0);
        description.push_str(&format!(
            "{} <@{}>\n　　👍 {} | 👎 {} | ✨ {ratio:.1}%\n\n",
            medal(i + 1),
            entry.target_id,
            entry.stats.good,
            entry.stats.bad,
        ));
    }

    CreateEmbed::new()
        .title(format!("🏆 {period} 순위"))
        .description(description)
        .color(GOLD)
        .footer(CreateEmbedFooter::new(format!(
            "좋아요 순 · 상위 {}명",
            entries.len()
        )))
}

pub fn vote_history(records: &[VoteRecord]) -> CreateEmbed {
    let lines: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "{} <@{}> - {} `{}`",
                r.kind.emoji(),
                r.target_id,
                r.kind,
                r.created_at
            )
        })
        .collect();

    CreateEmbed::new()
        .title("📝 내 투표 기록")
        .description(lines.join("\n"))
        .color(BLUE)
        .footer(CreateEmbedFooter::new("💡 이 기록은 본인만 볼 수 있습니다"))
}
