pub struct Config {
    pub discord_token: String,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .expect("DISCORD_TOKEN 환경변수가 필요합니다"),
            db_path: std::env::var("BINGO_BOT_DB_PATH")
                .unwrap_or_else(|_| "bingo-bot.db".to_string()),
        }
    }
}
