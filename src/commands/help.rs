use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::{Context, Error};

async fn help_impl(ctx: Context<'_>) -> Result<(), Error> {
    let bingo_cmds = "\
`/bingo_create` — 새 게임 만들기
`/bingo_addwords` — 단어 등록 (쉼표 구분, N*N 개, 최대 10x10, 단어당 15자)
`/bingo_lobby` — 버튼 로비 열기
`/bingo_join` / `/bingo_leave` — 참가 / 나가기
`/bingo_reroll` — 내 카드 다시 만들기 (시작 전)
`/bingo_start` / `/bingo_finish` — 시작 / 종료 (생성자)
`/bingo_cancel` — 게임 취소 (생성자)
`/bingo_mark` — 단어 표시
`/bingo_card` / `/bingo_show` — 내 카드 보기 / 공개
`/bingo_list` / `/bingo_participants` — 게임 목록 / 참가자";

    let vote_cmds = "\
`/vote` — 멤버에게 익명 투표 (good/bad)
`/my_votes` — 내 투표 기록
`/stats` — 멤버 투표 통계 (관리자)
`/leaderboard` — 투표 순위 (관리자)";

    let embed = CreateEmbed::new()
        .title("BingoBot 도움말")
        .field("빙고", bingo_cmds, false)
        .field("투표", vote_cmds, false)
        .color(0x5865F2);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// 봇 명령어 도움말
#[poise::command(slash_command, guild_only)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    help_impl(ctx).await
}
