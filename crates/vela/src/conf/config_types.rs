use serde::Deserialize;


#[derive(Debug, Deserialize)]
pub struct ServerConfiguration {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfiguration {
    pub url: String,
    pub run_migrations: bool,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfiguration {
    pub jaeger_enabled: bool,
    pub level: LogLevelConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct LogLevelConfiguration {
    pub root: Option<String>,
    #[serde(default)]
    pub directives: Vec<LoggingDirective>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingDirective {
    pub namespace: String,
    pub level: String,
}
