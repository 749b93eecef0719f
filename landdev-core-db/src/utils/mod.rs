use heapless::String as HeaplessString;
use landdev_core_api::{ApiError, ApiResult};
use std::str::FromStr;

/// Widest UTF-8 encoding of a single character.
pub const UTF8_MAX_BYTES: usize = 4;

/// Copies `value` into a bounded string, reporting the field on overflow.
///
/// `N` is the byte capacity. The limit enforced is `N / UTF8_MAX_BYTES`
/// characters, so a column sized for N characters takes any text of that
/// length whatever its script.
pub fn bounded<const N: usize>(field: &str, value: &str) -> ApiResult<HeaplessString<N>> {
    let max_chars = N / UTF8_MAX_BYTES;
    let too_long = || ApiError::ValidationError(format!("{field} must be at most {max_chars} characters"));
    if value.chars().count() > max_chars {
        return Err(too_long());
    }
    HeaplessString::from_str(value).map_err(|_| too_long())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_accepts_exact_fit() {
        let s: HeaplessString<16> = bounded("code", "abcd").unwrap();
        assert_eq!(s.as_str(), "abcd");
    }

    #[test]
    fn test_bounded_rejects_overflow() {
        let result: ApiResult<HeaplessString<16>> = bounded("code", "abcde");
        match result {
            Err(ApiError::ValidationError(msg)) => {
                assert!(msg.contains("code"));
                assert!(msg.contains("at most 4 characters"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_bounded_counts_characters_not_bytes() {
        // 70 characters, 210 bytes
        let owner = "रा".repeat(35);
        let s: HeaplessString<800> = bounded("land_owner", &owner).unwrap();
        assert_eq!(s.chars().count(), 70);

        let four_byte = "𝄞".repeat(4);
        let s: HeaplessString<16> = bounded("code", &four_byte).unwrap();
        assert_eq!(s.as_str(), four_byte);

        let result: ApiResult<HeaplessString<16>> = bounded("code", &"é".repeat(5));
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}
