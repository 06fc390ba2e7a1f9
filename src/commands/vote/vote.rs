use poise::serenity_prelude as serenity;
use poise::CreateReply;

use crate::utils::embed;
use crate::vote::VoteKind;
use crate::{Context, Error};

use super::{reply_error, vote_db};

async fn vote_impl(ctx: Context<'_>, user: serenity::User, kind: String) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("서버에서만 사용할 수 있습니다")?;

    let kind = match VoteKind::parse(&kind) {
        Some(k) => k,
        None => {
            return reply_error(ctx, "투표 종류를 선택해주세요: `good`, `bad`").await;
        }
    };

    if user.id == ctx.author().id {
        return reply_error(ctx, "자기 자신에게는 투표할 수 없습니다!").await;
    }
    if user.bot {
        return reply_error(ctx, "봇에게는 투표할 수 없습니다!").await;
    }

    let Some(db) = vote_db(ctx).await? else {
        return Ok(());
    };

    db.cast(ctx.author().id.get(), user.id.get(), guild_id.get(), kind)?;
    tracing::info!("투표 기록: guild {guild_id} -> {} ({})", user.id, kind.as_db());

    let name = user.global_name.as_deref().unwrap_or(&user.name);
    ctx.send(
        CreateReply::default()
            .embed(embed::success(&format!(
                "**{name}** 님에게 {}{kind} 투표를 했습니다!\n💡 투표는 익명이며 통계는 관리자만 볼 수 있습니다.",
                kind.emoji()
            )))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// 다른 멤버에게 익명 투표를 합니다
#[poise::command(slash_command, guild_only)]
pub async fn vote(
    ctx: Context<'_>,
    #[description = "투표할 멤버"] user: serenity::User,
    #[description = "투표 종류 (good/bad)"] kind: String,
) -> Result<(), Error> {
    vote_impl(ctx, user, kind).await
}
