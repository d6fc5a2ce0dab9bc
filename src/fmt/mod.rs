//! Bounded formatter: fixed-capacity text production without allocation.
//!
//! [`format_into`] renders a small set of directives into a
//! caller-supplied byte buffer and never writes past its end. Every
//! boundary condition is absorbed rather than signalled: output that
//! would exceed capacity is truncated (mid-number if need be), unknown
//! directives are swallowed, and a directive with no remaining argument
//! produces nothing.
//!
//! Arguments are an explicit, statically enumerated sequence of [`Arg`]
//! values constructed by the caller, not a variadic list.

/// Scratch capacity for one rendered number. A 64-bit value needs at
/// most 20 decimal digits.
const NTOA_CAPACITY: usize = 32;

/// One typed argument for [`format_into`].
///
/// Numeric rendering always uses the two's-complement magnitude: an
/// [`Arg::Int`] is reinterpreted as `u64` before digit extraction, so
/// `%d` of a negative value yields the magnitude's decimal digits, not a
/// signed display. This mirrors the established console behavior and is
/// part of the contract.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arg {
    /// An unsigned integer value.
    Uint(u64),
    /// A signed integer value, rendered as its two's-complement magnitude.
    Int(i64),
}

impl Arg {
    /// The value as the unsigned magnitude the digit renderer consumes.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    const fn magnitude(self) -> u64 {
        match self {
            Self::Uint(value) => value,
            Self::Int(value) => value as u64,
        }
    }
}

impl From<u32> for Arg {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for Arg {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<usize> for Arg {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<i32> for Arg {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Arg {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Format `fmt` into `buf`, consuming `args` left to right. Returns the
/// number of bytes written; the buffer's length is the hard capacity.
///
/// Recognized directives:
/// - `%%` — a literal `%`
/// - `%d` — next argument as decimal digits (unsigned magnitude)
/// - `%x` / `%X` — next argument as hexadecimal digits; the `X` form is
///   accepted but renders lowercase like `x` (an established discrepancy,
///   kept as documented behavior)
///
/// Any other byte after `%` swallows both bytes and emits nothing. A `%`
/// at the end of the format string is likewise swallowed.
///
/// The caller is expected to pass a zero-filled buffer: the formatter
/// writes no terminator and relies on the trailing bytes staying zero.
pub fn format_into(buf: &mut [u8], fmt: &str, args: &[Arg]) -> usize {
    let cnt = buf.len();
    let bytes = fmt.as_bytes();
    let mut args = args.iter().copied();
    let mut i_fmt = 0;
    let mut i_buf = 0;

    while i_fmt < bytes.len() && i_buf < cnt {
        if bytes[i_fmt] != b'%' {
            buf[i_buf] = bytes[i_fmt];
            i_buf += 1;
            i_fmt += 1;
            continue;
        }
        i_fmt += 1;
        let Some(&directive) = bytes.get(i_fmt) else {
            break;
        };
        match directive {
            b'%' => {
                buf[i_buf] = b'%';
                i_buf += 1;
            }
            b'd' => {
                if let Some(arg) = args.next() {
                    ntoa(buf, &mut i_buf, arg.magnitude(), 10);
                }
            }
            b'x' | b'X' => {
                if let Some(arg) = args.next() {
                    ntoa(buf, &mut i_buf, arg.magnitude(), 16);
                }
            }
            _ => {} // unknown directive: both bytes swallowed
        }
        i_fmt += 1;
    }
    i_buf
}

/// Append the base-`base` digits of `value` to `buf` at `*i_buf`.
///
/// Digits are extracted least-significant-first and reversed before
/// appending. Appending stops the instant `*i_buf` reaches the buffer's
/// end, dropping the remaining digits.
#[allow(clippy::cast_possible_truncation)]
fn ntoa(buf: &mut [u8], i_buf: &mut usize, mut value: u64, base: u64) {
    let mut digits = [0u8; NTOA_CAPACITY];
    let mut n = 0;
    loop {
        let digit = (value % base) as u8;
        digits[n] = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + digit - 10
        };
        n += 1;
        value /= base;
        if value == 0 {
            break;
        }
    }
    for &digit in digits[..n].iter().rev() {
        if *i_buf >= buf.len() {
            break;
        }
        buf[*i_buf] = digit;
        *i_buf += 1;
    }
}
