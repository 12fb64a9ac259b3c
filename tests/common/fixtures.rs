//! Static log corpora used across harnesses.

/// One case-exact "Hello World" and one lowercase variant.
pub const SAMPLE_LOG: &str = "\
2024-01-15 10:00:00 INFO  Starting application version 2.4.1
Hello World
2024-01-15 10:00:01 WARN  retrying connection attempt=1
hello world
2024-01-15 10:00:02 INFO  Graceful shutdown complete
";

/// The same phrase with irregular spacing and case.
pub const SPACED_LOG: &str = "Hello    World\nhello\tworld\n";

/// Mixed-severity corpus for range specs.
pub const SERVICE_LOG: &str = "\
ts=2024-01-15T10:00:00Z level=info msg=\"Server started\" port=8080
ts=2024-01-15T10:00:01Z level=error msg=\"Connection refused\" host=db.internal
ts=2024-01-15T10:00:02Z level=warn msg=\"Slow query\" duration_ms=4200
ts=2024-01-15T10:00:03Z level=warn msg=\"Slow query\" duration_ms=5100
ts=2024-01-15T10:00:04Z level=warn msg=\"Slow query\" duration_ms=3900
ts=2024-01-15T10:00:05Z level=error msg=\"Connection refused\" host=db.internal
ts=2024-01-15T10:00:06Z level=info msg=\"Graceful shutdown complete\"
";

/// Generate `n` synthetic lines, every tenth one an ERROR.
pub fn corpus_high_volume(n: usize) -> String {
    (0..n)
        .map(|i| {
            let level = match i % 10 {
                0 => "ERROR",
                1 | 2 => "WARN",
                _ => "INFO",
            };
            format!("2024-01-15T10:00:{:02}Z {level} log line {i}\n", i % 60)
        })
        .collect()
}
