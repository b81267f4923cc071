//! Small numeric helpers shared by several templates.

/// Greatest common divisor; `gcd(0, 0) == 0`.
#[inline]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Decimal digits of `n`, most significant first. `digits(0) == [0]`.
pub fn digits(mut n: u64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        out.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// True if `n` reads the same in both directions.
pub fn is_palindrome(n: u64) -> bool {
    let d = digits(n);
    d.iter().eq(d.iter().rev())
}

/// Append `items` to `out` separated by single spaces and terminated by `\n`.
pub fn push_line<I>(out: &mut String, items: I)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    use std::fmt::Write;
    let mut first = true;
    for item in items {
        if !first {
            out.push(' ');
        }
        first = false;
        let _ = write!(out, "{item}");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_edge_cases() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn digit_helpers() {
        assert_eq!(digits(0), vec![0]);
        assert_eq!(digits(1203), vec![1, 2, 0, 3]);
        assert!(is_palindrome(131));
        assert!(is_palindrome(7));
        assert!(!is_palindrome(10));
    }

    #[test]
    fn push_line_formats_without_trailing_space() {
        let mut s = String::new();
        push_line(&mut s, [1, 2, 3]);
        push_line(&mut s, Vec::<i32>::new());
        assert_eq!(s, "1 2 3\n\n");
    }
}
