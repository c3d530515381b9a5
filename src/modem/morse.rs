use std::thread;
use std::time::Duration;

use tracing::trace;

use super::ModemError;
use crate::radio::Radio;

const DASH: u8 = 0b1;
const GUARD_BIT: u8 = 0b1;
const UNSUPPORTED: u8 = 0xFF;

// ITU-R M.1677-1 character table, indexed by ASCII minus ' '. Each code is
// stored LSB first (dot = 0, dash = 1) behind a single guard bit marking
// its end. Characters without an ITU equivalent are marked unsupported.
const CODES: [u8; 59] = [
    0b00,        // ' '
    0b110101,    // '!'
    0b1010010,   // '"'
    UNSUPPORTED, // '#'
    UNSUPPORTED, // '$'
    UNSUPPORTED, // '%'
    UNSUPPORTED, // '&'
    0b1011110,   // '\''
    0b101101,    // '('
    0b1101101,   // ')'
    UNSUPPORTED, // '*'
    0b101010,    // '+'
    0b1110011,   // ','
    0b1100001,   // '-'
    0b1101010,   // '.'
    0b101001,    // '/'
    0b111111,    // '0'
    0b111110,    // '1'
    0b111100,    // '2'
    0b111000,    // '3'
    0b110000,    // '4'
    0b100000,    // '5'
    0b100001,    // '6'
    0b100011,    // '7'
    0b100111,    // '8'
    0b101111,    // '9'
    0b1000111,   // ':'
    UNSUPPORTED, // ';'
    UNSUPPORTED, // '<'
    0b110001,    // '='
    UNSUPPORTED, // '>'
    0b1001100,   // '?'
    0b1010110,   // '@'
    0b110,       // 'A'
    0b10001,     // 'B'
    0b10101,     // 'C'
    0b1001,      // 'D'
    0b10,        // 'E'
    0b10100,     // 'F'
    0b1011,      // 'G'
    0b10000,     // 'H'
    0b100,       // 'I'
    0b11110,     // 'J'
    0b1101,      // 'K'
    0b10010,     // 'L'
    0b111,       // 'M'
    0b101,       // 'N'
    0b1111,      // 'O'
    0b10110,     // 'P'
    0b11011,     // 'Q'
    0b1010,      // 'R'
    0b1000,      // 'S'
    0b11,        // 'T'
    0b1100,      // 'U'
    0b11000,     // 'V'
    0b1110,      // 'W'
    0b11001,     // 'X'
    0b11101,     // 'Y'
    0b10011,     // 'Z'
];

/// Look up the Morse code word for an ASCII byte, 0 when outside the table.
fn ascii_to_morse(b: u8) -> u8 {
    if !(b' '..=b'Z').contains(&b) {
        return 0;
    }
    CODES[(b - b' ') as usize]
}

/// Morse code modem keying a carrier on and off over a [`Radio`].
///
/// Element lengths derive from the words-per-minute speed using the PARIS
/// convention: one dot is 1200/wpm milliseconds.
pub struct Morse<R: Radio> {
    radio: R,
    base_hz: u64,
    wpm: u32,
    dot: Duration,
    dash: Duration,
    letter_space: Duration,
    word_space: Duration,
}

impl<R: Radio> Morse<R> {
    pub fn new(radio: R, base_hz: u64, wpm: u32) -> Self {
        let wpm = wpm.max(1);
        let dot_ms = 1200 / wpm as u64;
        Morse {
            radio,
            base_hz,
            wpm,
            dot: Duration::from_millis(dot_ms),
            dash: Duration::from_millis(3 * dot_ms),
            letter_space: Duration::from_millis(3 * dot_ms),
            word_space: Duration::from_millis(4 * dot_ms),
        }
    }

    pub fn base_frequency(&self) -> u64 {
        self.base_hz
    }

    pub fn speed(&self) -> u32 {
        self.wpm
    }

    /// Key the text out as Morse code; input is uppercased first.
    pub fn write(&mut self, text: &str) -> Result<usize, ModemError> {
        let message = text.to_uppercase();
        for b in message.bytes() {
            self.write_byte(b)?;
        }
        Ok(text.len())
    }

    pub fn close(&mut self) -> Result<(), ModemError> {
        self.radio.close()?;
        Ok(())
    }

    fn write_byte(&mut self, b: u8) -> Result<(), ModemError> {
        if b < b' ' || b == 0x60 || b > b'z' {
            return Err(ModemError::InvalidCharacter);
        }

        // inter-word pause
        if b == b' ' {
            self.radio.standby()?;
            thread::sleep(self.word_space);
            return Ok(());
        }

        let mut code = ascii_to_morse(b);
        if code == 0 || code == UNSUPPORTED {
            return Err(ModemError::InvalidCharacter);
        }

        trace!(character = %(b as char), code, "keying character");
        while code != GUARD_BIT {
            let hold = if code & DASH == 1 { self.dash } else { self.dot };
            self.radio.transmit(self.base_hz * 100)?;
            thread::sleep(hold);

            // inter-element pause
            self.radio.standby()?;
            thread::sleep(self.dot);

            code >>= 1;
        }

        // inter-letter pause, the element pause above already covers one dot
        self.radio.standby()?;
        thread::sleep(self.letter_space - self.dot);

        Ok(())
    }
}
