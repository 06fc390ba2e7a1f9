mod leaderboard;
mod my_votes;
mod stats;
mod vote;

use poise::CreateReply;

use crate::utils::embed;
use crate::vote::VoteDb;
use crate::{Context, Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        vote::vote(),
        stats::stats(),
        leaderboard::leaderboard(),
        my_votes::my_votes(),
    ]
}

async fn reply_error(ctx: Context<'_>, message: &str) -> Result<(), Error> {
    ctx.send(
        CreateReply::default()
            .embed(embed::error(message))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Returns the vote DB, or replies with an error when it failed to open at startup.
async fn vote_db(ctx: Context<'_>) -> Result<Option<&VoteDb>, Error> {
    match ctx.data().vote_db.as_ref() {
        Some(db) => Ok(Some(db)),
        None => {
            reply_error(ctx, "투표 기능을 사용할 수 없습니다 (DB 초기화 실패).").await?;
            Ok(None)
        }
    }
}

/// Administrator, Manage Guild, Manage Channels, or the guild owner.
async fn is_vote_admin(ctx: Context<'_>) -> Result<bool, Error> {
    let owner_id = ctx.guild().map(|g| g.owner_id);
    if owner_id == Some(ctx.author().id) {
        return Ok(true);
    }

    let member = ctx
        .author_member()
        .await
        .ok_or("멤버 정보를 가져올 수 없습니다")?;
    let perms = member.permissions.unwrap_or_default();
    Ok(perms.administrator() || perms.manage_guild() || perms.manage_channels())
}

async fn require_vote_admin(ctx: Context<'_>) -> Result<bool, Error> {
    if is_vote_admin(ctx).await? {
        return Ok(true);
    }
    reply_error(
        ctx,
        "관리자 전용 명령어입니다.\n필요 권한: 관리자, 서버 관리, 채널 관리 또는 서버 소유자",
    )
    .await?;
    Ok(false)
}
