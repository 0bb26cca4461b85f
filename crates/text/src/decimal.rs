/// Two ASCII digits for every value in `0..100`, back to back.
pub static DIGIT_PAIRS: [u8; 200] = *b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

/// Enough room for `u64::MAX` (20 digits) or `i64::MIN` (sign + 19 digits).
const BUFFER_SIZE: usize = 20;

/// Integers that can be rendered by [`DecimalBuffer`].
pub trait Decimal: Copy {
    /// Write the decimal form right-aligned into `buf`, returning the index
    /// of its first byte.
    fn write_decimal(self, buf: &mut [u8; BUFFER_SIZE]) -> usize;
}

#[inline]
fn copy_pair(buf: &mut [u8; BUFFER_SIZE], pos: usize, value: usize) {
    buf[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[value * 2..value * 2 + 2]);
}

fn write_unsigned(mut value: u64, buf: &mut [u8; BUFFER_SIZE]) -> usize {
    let mut pos = BUFFER_SIZE;

    while value >= 100 {
        let pair = (value % 100) as usize;
        value /= 100;
        pos -= 2;
        copy_pair(buf, pos, pair);
    }

    if value >= 10 {
        pos -= 2;
        copy_pair(buf, pos, value as usize);
    } else {
        pos -= 1;
        buf[pos] = b'0' + value as u8;
    }

    pos
}

fn write_signed(value: i64, buf: &mut [u8; BUFFER_SIZE]) -> usize {
    // `unsigned_abs` keeps i64::MIN representable.
    let mut pos = write_unsigned(value.unsigned_abs(), buf);
    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }
    pos
}

macro_rules! impl_decimal {
    ($writer:ident as $wide:ty => $($t:ty),+) => {
        $(
            impl Decimal for $t {
                #[inline]
                fn write_decimal(self, buf: &mut [u8; BUFFER_SIZE]) -> usize {
                    $writer(self as $wide, buf)
                }
            }
        )+
    };
}

impl_decimal!(write_unsigned as u64 => u8, u16, u32, u64, usize);
impl_decimal!(write_signed as i64 => i8, i16, i32, i64, isize);

/// Reusable stack buffer for integer formatting.
///
/// ```
/// use strutil_text::DecimalBuffer;
///
/// let mut buf = DecimalBuffer::new();
/// assert_eq!(buf.format(-1234i32), "-1234");
/// ```
#[derive(Clone, Copy)]
pub struct DecimalBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for DecimalBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalBuffer {
    #[inline]
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Render `value` and borrow the result from the buffer.
    pub fn format<T: Decimal>(&mut self, value: T) -> &str {
        let start = value.write_decimal(&mut self.bytes);
        // SAFETY: `write_decimal` only writes ASCII digits and '-' from
        // `start` to the end of the buffer.
        unsafe { std::str::from_utf8_unchecked(&self.bytes[start..]) }
    }
}

/// Render an integer as an owned decimal string.
#[inline]
pub fn to_decimal_string<T: Decimal>(value: T) -> String {
    DecimalBuffer::new().format(value).to_owned()
}

/// Floating point types accepted by [`float_to_string`].
pub trait Float: Copy + std::fmt::Display {}

impl Float for f32 {}
impl Float for f64 {}

/// Shortest text that parses back to the same value of the same width.
#[inline]
pub fn float_to_string<F: Float>(value: F) -> String {
    value.to_string()
}

#[cfg(test)]
#[path = "decimal_tests.rs"]
mod tests;
