//! printf-style template rendering
//!
//! Templates use `%` verbs that consume positional [`Arg`]s:
//!
//! | verb | meaning |
//! |------|---------|
//! | `%v` | natural representation of any argument |
//! | `%d` | signed/unsigned integer (`%b` `%o` `%x` `%X` for other bases) |
//! | `%s` | string |
//! | `%q` | double-quoted, escaped string |
//! | `%t` | boolean |
//! | `%f` `%F` `%e` `%E` `%g` `%G` | floating point |
//! | `%c` | character |
//! | `%%` | literal percent sign |
//!
//! Flags `-` `+` `0` ` ` `#`, a width and a `.precision` may sit between the
//! `%` and the verb. Either may be `*`, which takes it from the next integer
//! argument (a negative width left-aligns). Rendering never fails: mismatches
//! are written inline, e.g. `%!d(string=abc)`, `%!s(MISSING)`,
//! `%!(EXTRA int=7)`, `%!(BADWIDTH)` or `%!(NOVERB)`.
//!
//! Marker type names: `Arg::Int` shows as `int`, `Arg::Uint` as `uint64`,
//! `Arg::Float` as `float64`. `Arg::Char` shows as `char` and pre-rendered
//! values as `value`. `%q` escapes control characters only; other
//! non-printing code points are written as they are.

use std::fmt;

/// Positional argument for a log template
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Pre-rendered value; accepted by `%v` and `%s`
    Display(String),
}

impl Arg {
    /// Render any `Display` value as an argument
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Arg::Display(value.to_string())
    }

    /// Render any `Debug` value as an argument
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Arg::Display(format!("{:?}", value))
    }

    /// Type name used in inline error markers
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint64",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
            Arg::Display(_) => "value",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) | Arg::Display(s) => write!(f, "{}", s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Uint(u) => write!(f, "{}", u),
            Arg::Float(fl) => write!(f, "{}", fl),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
        }
    }
}

macro_rules! impl_from_arg {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }

            impl From<&$source> for Arg {
                fn from(value: &$source) -> Self {
                    Arg::$variant(*value as $target)
                }
            }
        )+
    };
}

impl_from_arg!(Int as i64: i8, i16, i32, i64, isize);
impl_from_arg!(Uint as u64: u8, u16, u32, u64, usize);
impl_from_arg!(Float as f64: f32, f64);
impl_from_arg!(Bool as bool: bool);
impl_from_arg!(Char as char: char);

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

const STAR_LIMIT: i64 = 1_000_000;

#[derive(Default)]
struct Spec {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitute `args` into `template`
///
/// # Example
///
/// ```
/// use request_logger::{sprintf, Arg};
///
/// let args = [Arg::from(7), Arg::from(true), Arg::from("job")];
/// let line = sprintf("count=%d ok=%t name=%s", &args);
/// assert_eq!(line, "count=7 ok=true name=job");
/// ```
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        if chars.peek() == Some(&'*') {
            chars.next();
            match star_arg(args, &mut next_arg) {
                Some(width) => {
                    if width < 0 {
                        spec.minus = true;
                        spec.zero = false;
                    }
                    spec.width = Some(width.unsigned_abs() as usize);
                }
                None => out.push_str("%!(BADWIDTH)"),
            }
        } else {
            spec.width = read_number(&mut chars);
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            if chars.peek() == Some(&'*') {
                chars.next();
                match star_arg(args, &mut next_arg) {
                    // A negative precision counts as none
                    Some(precision) => spec.precision = usize::try_from(precision).ok(),
                    None => out.push_str("%!(BADPREC)"),
                }
            } else {
                spec.precision = Some(read_number(&mut chars).unwrap_or(0));
            }
        }

        let verb = match chars.next() {
            Some(verb) => verb,
            None => {
                out.push_str("%!(NOVERB)");
                break;
            }
        };

        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                format_arg(&mut out, verb, &spec, arg);
            }
            None => {
                out.push_str("%!");
                out.push(verb);
                out.push_str("(MISSING)");
            }
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        let extra: Vec<String> = args[next_arg..]
            .iter()
            .map(|arg| format!("{}={}", arg.type_name(), arg))
            .collect();
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

/// Width or precision taken from the next argument; consumed even when it
/// is not a usable integer
fn star_arg(args: &[Arg], next_arg: &mut usize) -> Option<i64> {
    let arg = args.get(*next_arg)?;
    *next_arg += 1;
    let value = match arg {
        Arg::Int(i) => *i,
        Arg::Uint(u) => i64::try_from(*u).ok()?,
        _ => return None,
    };
    (-STAR_LIMIT..=STAR_LIMIT).contains(&value).then_some(value)
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}

fn format_arg(out: &mut String, verb: char, spec: &Spec, arg: &Arg) {
    let rendered = match (verb, arg) {
        ('v', Arg::Float(f)) => Some(format_general(*f, spec.precision)),
        ('v', Arg::Int(i)) => Some(signed(*i as i128, spec)),
        ('v', Arg::Uint(u)) => Some(signed(*u as i128, spec)),
        ('v', Arg::Char(c)) => Some(c.to_string()),
        ('v', Arg::Str(s)) | ('v', Arg::Display(s)) => Some(truncate(s, spec.precision)),
        ('v', Arg::Bool(b)) | ('t', Arg::Bool(b)) => Some(b.to_string()),

        ('d', Arg::Int(i)) => Some(signed(*i as i128, spec)),
        ('d', Arg::Uint(u)) => Some(signed(*u as i128, spec)),
        ('d', Arg::Char(c)) => Some(signed(*c as i128, spec)),

        ('b' | 'o' | 'x' | 'X', Arg::Int(i)) => Some(radix(*i as i128, verb, spec)),
        ('b' | 'o' | 'x' | 'X', Arg::Uint(u)) => Some(radix(*u as i128, verb, spec)),
        ('x' | 'X', Arg::Str(s)) | ('x' | 'X', Arg::Display(s)) => Some(hex_bytes(s, verb)),

        ('c', Arg::Char(c)) => Some(c.to_string()),
        ('c', Arg::Int(i)) => char_from(*i as i128),
        ('c', Arg::Uint(u)) => char_from(*u as i128),

        ('s', Arg::Str(s)) | ('s', Arg::Display(s)) => Some(truncate(s, spec.precision)),
        ('q', Arg::Str(s)) | ('q', Arg::Display(s)) => Some(quote(s, '"')),
        ('q', Arg::Char(c)) => Some(quote(&c.to_string(), '\'')),

        ('f' | 'F', Arg::Float(f)) => {
            let fixed = format!("{:.*}", spec.precision.unwrap_or(6), f.abs());
            Some(with_sign(fixed, *f, spec))
        }
        ('e' | 'E', Arg::Float(f)) => {
            let e = format_exp(f.abs(), spec.precision.unwrap_or(6));
            let e = if verb == 'E' { e.to_uppercase() } else { e };
            Some(with_sign(e, *f, spec))
        }
        ('g' | 'G', Arg::Float(f)) => {
            let g = format_general(*f, spec.precision);
            Some(if verb == 'G' { g.to_uppercase() } else { g })
        }

        _ => None,
    };

    match rendered {
        Some(text) => pad(out, &text, spec, is_numeric(arg) && verb != 'c' && verb != 'q'),
        None => {
            out.push_str("%!");
            out.push(verb);
            out.push('(');
            out.push_str(arg.type_name());
            out.push('=');
            out.push_str(&arg.to_string());
            out.push(')');
        }
    }
}

fn is_numeric(arg: &Arg) -> bool {
    matches!(arg, Arg::Int(_) | Arg::Uint(_) | Arg::Float(_))
}

fn signed(value: i128, spec: &Spec) -> String {
    let digits = value.unsigned_abs().to_string();
    let digits = match spec.precision {
        Some(p) if digits.len() < p => format!("{}{}", "0".repeat(p - digits.len()), digits),
        _ => digits,
    };
    if value < 0 {
        format!("-{}", digits)
    } else if spec.plus {
        format!("+{}", digits)
    } else if spec.space {
        format!(" {}", digits)
    } else {
        digits
    }
}

fn radix(value: i128, verb: char, spec: &Spec) -> String {
    let magnitude = value.unsigned_abs();
    let (digits, prefix) = match verb {
        'b' => (format!("{:b}", magnitude), "0b"),
        'o' => (format!("{:o}", magnitude), "0"),
        'x' => (format!("{:x}", magnitude), "0x"),
        _ => (format!("{:X}", magnitude), "0X"),
    };
    let sign = if value < 0 { "-" } else { "" };
    if spec.sharp {
        format!("{}{}{}", sign, prefix, digits)
    } else {
        format!("{}{}", sign, digits)
    }
}

fn hex_bytes(s: &str, verb: char) -> String {
    s.bytes()
        .map(|b| {
            if verb == 'X' {
                format!("{:02X}", b)
            } else {
                format!("{:02x}", b)
            }
        })
        .collect()
}

fn char_from(value: i128) -> Option<String> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .map(|c| c.to_string())
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_string(),
    }
}

fn with_sign(magnitude: String, value: f64, spec: &Spec) -> String {
    if value.is_sign_negative() && !value.is_nan() {
        format!("-{}", magnitude)
    } else if spec.plus {
        format!("+{}", magnitude)
    } else if spec.space {
        format!(" {}", magnitude)
    } else {
        magnitude
    }
}

/// `1.500000e+03` style: mantissa with `precision` digits, signed exponent
/// of at least two digits
fn format_exp(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// `%g` rendering: `%e` form when the decimal exponent is below -4 or at
/// least the precision (6 for the shortest form), `%f` form otherwise, with
/// no trailing zeros in either
fn format_general(value: f64, precision: Option<usize>) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();
    if abs == 0.0 {
        return format!("{}0", sign);
    }

    // Round first so the exponent reflects the rounded digits
    let raw = match precision {
        Some(p) => format!("{:.*e}", p.max(1) - 1, abs),
        None => format!("{:e}", abs),
    };
    let (mantissa, exp) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return value.to_string(),
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = match digits.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let nd = digits.len() as i32;
    let dp = exp + 1;

    let eprec = match precision {
        Some(p) => {
            let p = p.max(1) as i32;
            if p > nd && nd >= dp {
                nd
            } else {
                p
            }
        }
        None => 6,
    };

    let body = if exp < -4 || exp >= eprec {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{:02}", first, exp_sign, exp.unsigned_abs())
        } else {
            format!("{}.{}e{}{:02}", first, rest, exp_sign, exp.unsigned_abs())
        }
    } else if dp <= 0 {
        format!("0.{}{}", "0".repeat(dp.unsigned_abs() as usize), digits)
    } else if dp < nd {
        let (int, frac) = digits.split_at(dp as usize);
        format!("{}.{}", int, frac)
    } else {
        format!("{}{}", digits, "0".repeat((dp - nd) as usize))
    };
    format!("{}{}", sign, body)
}

/// Double-quoted (or single-quoted for chars) literal with `\n`, `\t`,
/// `\x1b`, `\u00ad` style escapes
fn quote(s: &str, delim: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

fn pad(out: &mut String, text: &str, spec: &Spec, numeric: bool) {
    let len = text.chars().count();
    let width = match spec.width {
        Some(w) if w > len => w,
        _ => {
            out.push_str(text);
            return;
        }
    };
    let fill = width - len;

    if spec.minus {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero && numeric {
        let (sign, rest) = match text.chars().next() {
            Some(c @ ('-' | '+' | ' ')) => (Some(c), &text[1..]),
            _ => (None, text),
        };
        if let Some(sign) = sign {
            out.push(sign);
        }
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(rest);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<const N: usize>(values: [Arg; N]) -> Vec<Arg> {
        values.to_vec()
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(sprintf("no verbs here", &[]), "no verbs here");
        assert_eq!(sprintf("", &[]), "");
    }

    #[test]
    fn test_common_verbs() {
        assert_eq!(sprintf("count=%d", &[Arg::from(7)]), "count=7");
        assert_eq!(sprintf("%s!", &[Arg::from("hi")]), "hi!");
        assert_eq!(sprintf("%t", &[Arg::from(false)]), "false");
        assert_eq!(sprintf("%f", &[Arg::from(3.14)]), "3.140000");
        assert_eq!(sprintf("%.2f", &[Arg::from(3.14159)]), "3.14");
        assert_eq!(sprintf("%v %v", &args([Arg::from(1234), Arg::from("x")])), "1234 x");
        assert_eq!(sprintf("%v", &[Arg::from(2.5)]), "2.5");
        assert_eq!(sprintf("100%%", &[]), "100%");
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(sprintf("%x", &[Arg::from(255)]), "ff");
        assert_eq!(sprintf("%X", &[Arg::from(255)]), "FF");
        assert_eq!(sprintf("%#x", &[Arg::from(255)]), "0xff");
        assert_eq!(sprintf("%o", &[Arg::from(8)]), "10");
        assert_eq!(sprintf("%b", &[Arg::from(5)]), "101");
        assert_eq!(sprintf("%x", &[Arg::from(-255)]), "-ff");
        assert_eq!(sprintf("%x", &[Arg::from("hi")]), "6869");
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(sprintf("[%5d]", &[Arg::from(42)]), "[   42]");
        assert_eq!(sprintf("[%-5d]", &[Arg::from(42)]), "[42   ]");
        assert_eq!(sprintf("[%05d]", &[Arg::from(-42)]), "[-0042]");
        assert_eq!(sprintf("[%+d]", &[Arg::from(42)]), "[+42]");
        assert_eq!(sprintf("[%6s]", &[Arg::from("ab")]), "[    ab]");
        assert_eq!(sprintf("[%.2s]", &[Arg::from("abcdef")]), "[ab]");
        assert_eq!(sprintf("[%8.3f]", &[Arg::from(-1.5)]), "[  -1.500]");
    }

    #[test]
    fn test_exponent_and_general() {
        assert_eq!(sprintf("%e", &[Arg::from(1500.0)]), "1.500000e+03");
        assert_eq!(sprintf("%E", &[Arg::from(0.00015)]), "1.500000E-04");
        assert_eq!(sprintf("%g", &[Arg::from(3.14)]), "3.14");
        assert_eq!(sprintf("%.3g", &[Arg::from(3.14159)]), "3.14");
        assert_eq!(sprintf("%v", &[Arg::from(1e21)]), "1e+21");
    }

    #[test]
    fn test_general_switches_to_exponent_at_six_digits() {
        assert_eq!(sprintf("%v", &[Arg::from(1234567.0)]), "1.234567e+06");
        assert_eq!(sprintf("%g", &[Arg::from(1e6)]), "1e+06");
        assert_eq!(sprintf("%v", &[Arg::from(123456.0)]), "123456");
        assert_eq!(sprintf("%v", &[Arg::from(100.0)]), "100");
        assert_eq!(sprintf("%v", &[Arg::from(0.0001)]), "0.0001");
        assert_eq!(sprintf("%v", &[Arg::from(0.00001)]), "1e-05");
        assert_eq!(sprintf("%v", &[Arg::from(-2.5e-7)]), "-2.5e-07");
        assert_eq!(sprintf("%v", &[Arg::from(0.0)]), "0");
        assert_eq!(sprintf("%G", &[Arg::from(1e6)]), "1E+06");
    }

    #[test]
    fn test_general_precision_rounds_before_choosing_form() {
        assert_eq!(sprintf("%.2g", &[Arg::from(99.9)]), "1e+02");
        assert_eq!(sprintf("%.3g", &[Arg::from(99.9)]), "99.9");
        assert_eq!(sprintf("%.3g", &[Arg::from(100.0)]), "100");
        assert_eq!(sprintf("%.2g", &[Arg::from(123.0)]), "1.2e+02");
        assert_eq!(sprintf("%.4g", &[Arg::from(0.000123456)]), "0.0001235");
        assert_eq!(sprintf("%.1g", &[Arg::from(0.96)]), "1");
    }

    #[test]
    fn test_star_width_and_precision() {
        assert_eq!(sprintf("[%*d]", &args([Arg::from(5), Arg::from(3)])), "[    3]");
        assert_eq!(sprintf("[%-*d]", &args([Arg::from(3), Arg::from(7)])), "[7  ]");
        assert_eq!(sprintf("[%*d]", &args([Arg::from(-3), Arg::from(7)])), "[7  ]");
        assert_eq!(
            sprintf("%.*f", &args([Arg::from(2), Arg::from(3.14159)])),
            "3.14"
        );
        assert_eq!(
            sprintf("%*.*f|", &args([Arg::from(6), Arg::from(1), Arg::from(2.26)])),
            "   2.3|"
        );
        assert_eq!(
            sprintf("%*d", &args([Arg::from("x"), Arg::from(3)])),
            "%!(BADWIDTH)3"
        );
        assert_eq!(
            sprintf("%.*d", &args([Arg::from(true), Arg::from(3)])),
            "%!(BADPREC)3"
        );
        assert_eq!(sprintf("%*d", &[]), "%!(BADWIDTH)%!d(MISSING)");
    }

    #[test]
    fn test_char_and_quote() {
        assert_eq!(sprintf("%c", &[Arg::from('z')]), "z");
        assert_eq!(sprintf("%c", &[Arg::from(65)]), "A");
        assert_eq!(sprintf("%q", &[Arg::from("a\"b")]), "\"a\\\"b\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(sprintf("%q", &[Arg::from("\u{1b}[0m")]), r#""\x1b[0m""#);
        assert_eq!(sprintf("%q", &[Arg::from("a\tb\n")]), r#""a\tb\n""#);
        assert_eq!(sprintf("%q", &[Arg::from("\u{7f}\u{85}")]), r#""\x7f\u0085""#);
        assert_eq!(sprintf("%q", &[Arg::from("it's é")]), r#""it's é""#);
        assert_eq!(sprintf("%q", &[Arg::from('\'')]), r#"'\''"#);
        assert_eq!(sprintf("%q", &[Arg::from('"')]), r#"'"'"#);
    }

    #[test]
    fn test_uint_marker_type() {
        assert_eq!(sprintf("%t", &[Arg::from(7_u64)]), "%!t(uint64=7)");
        assert_eq!(sprintf("", &[Arg::from(7_u8)]), "%!(EXTRA uint64=7)");
    }

    #[test]
    fn test_display_and_debug_args() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "bye guys");
        assert_eq!(sprintf("%v", &[Arg::display(&err)]), "bye guys");
        assert_eq!(sprintf("%s", &[Arg::debug(&Some(1))]), "Some(1)");
    }

    #[test]
    fn test_wrong_type_marker() {
        assert_eq!(sprintf("%d", &[Arg::from("abc")]), "%!d(string=abc)");
        assert_eq!(sprintf("%t", &[Arg::from(1)]), "%!t(int=1)");
        assert_eq!(sprintf("%z", &[Arg::from(5)]), "%!z(int=5)");
    }

    #[test]
    fn test_missing_and_extra_markers() {
        assert_eq!(sprintf("a=%d b=%d", &[Arg::from(1)]), "a=1 b=%!d(MISSING)");
        assert_eq!(
            sprintf("a=%d", &args([Arg::from(1), Arg::from(7), Arg::from("x")])),
            "a=1%!(EXTRA int=7, string=x)"
        );
        assert_eq!(sprintf("trailing %", &[]), "trailing %!(NOVERB)");
    }

    #[test]
    fn test_from_references() {
        let n = 5_u16;
        let flag = true;
        let name = String::from("svc");
        assert_eq!(
            sprintf("%d %t %s", &args([Arg::from(&n), Arg::from(&flag), Arg::from(&name)])),
            "5 true svc"
        );
    }
}
