use bingo_bot::{bingo, commands, config, events, vote, Data};
use poise::serenity_prelude as serenity;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // 투표 DB 초기화 (실패해도 빙고는 동작)
    let vote_db = match vote::VoteDb::new(&config.db_path) {
        Ok(db) => {
            tracing::info!("투표 DB 초기화 완료: {}", config.db_path);
            Some(db)
        }
        Err(e) => {
            tracing::error!("투표 DB 초기화 실패: {e}");
            None
        }
    };

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    if let poise::FrameworkError::Command { error, ctx, .. } = &error {
                        tracing::error!("명령어 `{}` 처리 중 오류: {error}", ctx.command().name);
                    }
                    if let Err(e) = poise::builtins::on_error(error).await {
                        tracing::error!("오류 처리 실패: {e}");
                    }
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                tracing::info!("봇이 준비되었습니다!");
                Ok(Data {
                    games: bingo::new_games(),
                    vote_db,
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .expect("클라이언트 생성 실패");

    if let Err(e) = client.start().await {
        tracing::error!("클라이언트 오류: {e}");
    }
}
