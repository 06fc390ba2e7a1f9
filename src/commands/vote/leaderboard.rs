use poise::CreateReply;

use crate::utils::embed;
use crate::vote::{self, Period};
use crate::{Context, Error};

use super::{reply_error, require_vote_admin, vote_db};

async fn leaderboard_impl(
    ctx: Context<'_>,
    period: Option<String>,
    count: Option<i64>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("서버에서만 사용할 수 있습니다")?;

    if !require_vote_admin(ctx).await? {
        return Ok(());
    }

    let period = match period.as_deref().map(Period::parse) {
        None => Period::All,
        Some(Some(p)) => p,
        Some(None) => {
            return reply_error(ctx, "기간을 선택해주세요: `all`, `15`, `30`, `90`").await;
        }
    };
    let limit = vote::clamp_leaderboard_limit(count.unwrap_or(i64::from(vote::DEFAULT_LEADERBOARD)));

    let Some(db) = vote_db(ctx).await? else {
        return Ok(());
    };

    let entries = db.leaderboard(guild_id.get(), period, limit)?;
    if entries.is_empty() {
        return reply_error(ctx, &format!("{period} 동안 투표 기록이 없습니다.")).await;
    }

    ctx.send(
        CreateReply::default()
            .embed(embed::leaderboard(&entries, period))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// 서버 투표 순위를 확인합니다 (관리자 전용)
#[poise::command(slash_command, guild_only)]
pub async fn leaderboard(
    ctx: Context<'_>,
    #[description = "기간 (all/15/30/90)"] period: Option<String>,
    #[description = "표시할 인원 (최대 20)"] count: Option<i64>,
) -> Result<(), Error> {
    leaderboard_impl(ctx, period, count).await
}
