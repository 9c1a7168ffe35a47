//! 관측값 배치 파서.
//!
//! 와이어 형식: 레코드는 `\n`, 필드는 `\t`로 구분.
//! 필드 0 = 정수 타임스탬프, 필드 1 = 실수 값, 나머지 필드는 예약(무시).
//!
//! 각 줄은 독립적으로 파싱된다. 형식이 잘못된 줄은 그 줄만 버려지고
//! 같은 배치의 다른 줄에는 영향을 주지 않는다.

use benchpulse_core::models::observation::RawObservation;

/// 레코드 구분자
pub const RECORD_DELIMITER: char = '\n';

/// 필드 구분자
pub const FIELD_DELIMITER: char = '\t';

/// 원시 배치를 관측값 시퀀스로 변환 (지연 평가).
///
/// 부수 효과가 없으므로 같은 입력으로 다시 호출하면 같은 시퀀스를 얻는다.
pub fn parse_observations(raw: &str) -> impl Iterator<Item = RawObservation> + '_ {
    raw.split(RECORD_DELIMITER).filter_map(parse_line)
}

/// 한 줄 파싱. 필드가 2개 미만이거나 필드 전체가 숫자가 아니면 None.
pub fn parse_line(line: &str) -> Option<RawObservation> {
    let mut fields = line.split(FIELD_DELIMITER);
    let date = fields.next()?.trim().parse::<i64>().ok()?;
    let value = fields.next()?.trim().parse::<f64>().ok()?;

    // NaN/inf 문자열도 f64로 파싱되므로 별도로 거른다
    if !value.is_finite() {
        return None;
    }

    Some(RawObservation { date, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(raw: &str) -> Vec<(i64, f64)> {
        parse_observations(raw).map(|o| (o.date, o.value)).collect()
    }

    #[test]
    fn well_formed_lines() {
        assert_eq!(
            collect("1000\t0.5\n1001\t0.7"),
            vec![(1000, 0.5), (1001, 0.7)]
        );
    }

    #[test]
    fn malformed_line_does_not_affect_siblings() {
        assert_eq!(collect("abc\t1\n1002\t0.9"), vec![(1002, 0.9)]);
        assert_eq!(collect("1\t2\n3\n4\tx\n5\t6"), vec![(1, 2.0), (5, 6.0)]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(collect("10\t1.5\tfoo\tbar"), vec![(10, 1.5)]);
    }

    #[test]
    fn empty_input_and_blank_lines() {
        assert!(collect("").is_empty());
        assert_eq!(collect("\n\n7\t1\n"), vec![(7, 1.0)]);
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(collect("1\tNaN\n2\tinf\n3\t-inf").is_empty());
    }

    #[test]
    fn non_integer_date_rejected() {
        assert!(collect("1.5\t2\n\t3").is_empty());
    }

    #[test]
    fn trailing_garbage_rejects_whole_line() {
        assert!(collect("1000.0\t0.5").is_empty());
        assert!(collect("1000\t0.5xyz").is_empty());
    }

    #[test]
    fn negative_and_exponent_values() {
        assert_eq!(collect("-5\t-1e3"), vec![(-5, -1000.0)]);
    }

    #[test]
    fn carriage_return_tolerated() {
        assert_eq!(collect("1\t2.5\r\n2\t3\r"), vec![(1, 2.5), (2, 3.0)]);
    }

    #[test]
    fn parsing_is_restartable() {
        let raw = "1\t1\nbad\n2\t2";
        assert_eq!(collect(raw), collect(raw));
    }
}
