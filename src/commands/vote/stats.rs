use poise::serenity_prelude as serenity;
use poise::CreateReply;

use crate::utils::embed;
use crate::vote::Period;
use crate::{Context, Error};

use super::{reply_error, require_vote_admin, vote_db};

async fn stats_impl(
    ctx: Context<'_>,
    user: Option<serenity::User>,
    period: Option<String>,
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

    let Some(db) = vote_db(ctx).await? else {
        return Ok(());
    };

    let user = user.unwrap_or_else(|| ctx.author().clone());
    let stats = db.stats(user.id.get(), guild_id.get(), period)?;
    let name = user.global_name.as_deref().unwrap_or(&user.name);

    ctx.send(
        CreateReply::default()
            .embed(embed::vote_stats(name, stats, period))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// 멤버의 투표 통계를 확인합니다 (관리자 전용)
#[poise::command(slash_command, guild_only)]
pub async fn stats(
    ctx: Context<'_>,
    #[description = "확인할 멤버 (기본: 나)"] user: Option<serenity::User>,
    #[description = "기간 (all/15/30/90)"] period: Option<String>,
) -> Result<(), Error> {
    stats_impl(ctx, user, period).await
}
