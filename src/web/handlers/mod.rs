pub mod hashtags;
pub mod products;

/// Liveness check.
pub async fn index() -> &'static str {
    "서버 잘 작동됨!"
}

/// Reads the leading integer of a path id, so `1abc` and `1.5` both mean 1.
/// Ids without leading digits match no record.
fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign = raw.len() - unsigned.len();
    raw[..sign + digits].parse().ok()
}
