use chrono::{SecondsFormat, Utc};
use env_logger::{fmt::Formatter, Env};
use log::{kv, Level, Record};
use serde::Serialize;
use std::io::{self, Write};

/// Renders any serializable value for a log line.
pub trait SerdeLogging {
    fn as_json_str(&self) -> String;
}

impl<T: Serialize> SerdeLogging for T {
    #[cfg(debug_assertions)]
    fn as_json_str(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_owned())
    }

    #[cfg(not(debug_assertions))]
    fn as_json_str(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Coloured single line for terminals.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

fn level_to_str(level: Level) -> &'static str {
    match level {
        Level::Error => "Error",
        Level::Debug => "Debug",
        Level::Info => "Info",
        Level::Warn => "Warn",
        Level::Trace => "Trace",
    }
}

struct RecordParams<'a> {
    severity: &'static str,
    date: String,
    module_path: &'a str,
    file: &'a str,
    line: u32,
}

fn record_params<'a>(record: &'a Record) -> RecordParams<'a> {
    RecordParams {
        severity: level_to_str(record.metadata().level()),
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        module_path: record.module_path().unwrap_or_default(),
        file: record.file().unwrap_or_default(),
        line: record.line().unwrap_or_default(),
    }
}

fn kv_to_io(error: kv::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}

fn write_pretty(f: &mut Formatter, record: &Record) -> io::Result<()> {
    use env_logger::fmt::Color;

    struct PairVisitor<'a, W: Write> {
        writer: &'a mut W,
    }
    impl<'kvs, 'a, W: Write> kv::Visitor<'kvs> for PairVisitor<'a, W> {
        fn visit_pair(&mut self, key: kv::Key<'kvs>, val: kv::Value<'kvs>) -> Result<(), kv::Error> {
            write!(self.writer, "\n    {} = {}", key, val).map_err(|_| kv::Error::msg("failed to write key value pair"))
        }
    }

    let params = record_params(record);

    let mut level_style = f.default_level_style(record.level());
    level_style.set_bold(true);

    let mut general_style = f.style();
    general_style.set_color(Color::Rgb(110, 110, 110));

    let mut module_style = f.style();
    module_style.set_color(Color::Yellow);

    write!(
        f,
        "{}  {:5}  {} ({}:{})  {}",
        general_style.value(params.date),
        level_style.value(params.severity),
        module_style.value(params.module_path),
        general_style.value(params.file),
        general_style.value(params.line),
        record.args()
    )?;

    let mut visitor = PairVisitor { writer: f };
    record.key_values().visit(&mut visitor).map_err(kv_to_io)?;
    writeln!(f)
}

fn write_json<W: Write>(f: &mut W, record: &Record) -> io::Result<()> {
    struct JsonPairVisitor<'a, W: Write> {
        writer: &'a mut W,
    }
    impl<'kvs, 'a, W: Write> kv::Visitor<'kvs> for JsonPairVisitor<'a, W> {
        fn visit_pair(&mut self, key: kv::Key<'kvs>, val: kv::Value<'kvs>) -> Result<(), kv::Error> {
            let key = serde_json::Value::String(key.to_string());
            let raw = val.to_string();
            // Values that already are JSON are embedded as is.
            let result = if serde_json::from_str::<serde_json::Value>(&raw).is_ok() {
                write!(self.writer, ",{}:{}", key, raw)
            } else {
                write!(self.writer, ",{}:{}", key, serde_json::Value::String(raw))
            };
            result.map_err(|_| kv::Error::msg("failed to write key value pair"))
        }
    }

    let params = record_params(record);
    let message = serde_json::Value::String(record.args().to_string());
    write!(
        f,
        r#"{{"date":"{}","severity":"{}","message":{},"className":"{}","file":"{}","line":{}"#,
        params.date, params.severity, message, params.module_path, params.file, params.line
    )?;

    let mut visitor = JsonPairVisitor { writer: f };
    record.key_values().visit(&mut visitor).map_err(kv_to_io)?;
    writeln!(f, "}}")
}

/// Builder reading the filter from `RUST_LOG`, defaulting to `info`.
pub fn builder(format: LogFormat) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    match format {
        LogFormat::Pretty => builder.format(write_pretty),
        LogFormat::Json => builder.format(|f, record| write_json(f, record)),
    };
    builder
}

pub fn init_with(format: LogFormat) {
    // A logger installed earlier (tests, embedding binaries) wins.
    let _ = builder(format).try_init();
}

pub fn init() {
    init_with(LogFormat::for_build());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_json(record: &Record) -> serde_json::Value {
        let mut buf = Vec::new();
        write_json(&mut buf, record).unwrap();
        let output = std::str::from_utf8(&buf).unwrap();
        assert!(output.ends_with('\n'));
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_write_json() {
        let kvs = vec![("prize", "p1"), ("summary", "{\"winners\":2}")];
        let record = log::Record::builder()
            .args(format_args!("judging finalized"))
            .level(log::Level::Info)
            .module_path(Some("contest_judge::judge"))
            .file(Some("src/judge/session.rs"))
            .line(Some(12))
            .key_values(&kvs)
            .build();

        let json = render_json(&record);
        assert_eq!(json["severity"], "Info");
        assert_eq!(json["message"], "judging finalized");
        assert_eq!(json["className"], "contest_judge::judge");
        assert_eq!(json["file"], "src/judge/session.rs");
        assert_eq!(json["line"], json!(12));
        assert_eq!(json["prize"], "p1");
        assert_eq!(json["summary"], json!({"winners": 2}));
    }

    #[test]
    fn test_write_json_escapes_message() {
        let record = log::Record::builder()
            .args(format_args!("contestant \"a\" won"))
            .level(log::Level::Warn)
            .build();

        let json = render_json(&record);
        assert_eq!(json["severity"], "Warn");
        assert_eq!(json["message"], "contestant \"a\" won");
        assert_eq!(json["className"], "");
        assert_eq!(json["line"], json!(0));
    }

    #[test]
    fn test_as_json_str() {
        #[derive(Serialize)]
        struct Summary {
            winners: usize,
        }

        let rendered = Summary { winners: 3 }.as_json_str();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json, json!({"winners": 3}));
    }
}
