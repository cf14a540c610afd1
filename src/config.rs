use sqlx::mysql::MySqlConnectOptions;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which of the two page layouts to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiStyle {
    /// "Add" button opening a modal form, delete via `GET /delete?id=`.
    #[default]
    Modal,
    /// Always-visible form, add/delete via `POST /` with an `action` field.
    Inline,
}

impl UiStyle {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "modal" => Some(Self::Modal),
            "inline" => Some(Self::Inline),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::Inline => "inline",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
    pub ui_style: UiStyle,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let db = DbConfig {
            host: string("DB_HOST", "localhost"),
            user: string("DB_USER", "root"),
            password: string("DB_PASSWORD", ""),
            name: string("DB_NAME", "student_db"),
            port: lookup("DB_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(3306),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
        };
        let server = ServerConfig {
            host: string("APP_HOST", "0.0.0.0"),
            port: lookup("APP_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(8080),
        };
        let ui_style = lookup("UI_STYLE")
            .and_then(|v| UiStyle::parse(&v))
            .unwrap_or_default();

        Self {
            db,
            server,
            ui_style,
        }
    }
}
