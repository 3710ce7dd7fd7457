use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

use super::error::PrepareError;

pub const ID_SIZE: usize = std::mem::size_of::<u32>();
pub const USERNAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// One record of the single hard-coded table.
///
/// On a page a row occupies exactly [`ROW_SIZE`] bytes:
///
/// ```text
/// | id: u32 LE (4) | username (32, NUL padded) | email (255, NUL padded) |
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawRow")]
pub struct Row {
    id: u32,
    username: String,
    email: String,
}

// Deserialized rows go through `Row::new` like every other row.
#[derive(Deserialize)]
struct RawRow {
    id: u32,
    username: String,
    email: String,
}

impl TryFrom<RawRow> for Row {
    type Error = PrepareError;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        Row::new(raw.id, &raw.username, &raw.email)
    }
}

impl Row {
    /// Text fields may fill their whole column; anything longer is rejected.
    /// NUL marks the end of a column, so text containing one is rejected too.
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self, PrepareError> {
        if username.len() > USERNAME_SIZE || email.len() > EMAIL_SIZE {
            return Err(PrepareError::StringTooLong);
        }
        if username.contains('\0') || email.contains('\0') {
            return Err(PrepareError::NulByte);
        }
        Ok(Row {
            id,
            username: username.to_owned(),
            email: email.to_owned(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Writes the row into `buf`, which must be exactly [`ROW_SIZE`] bytes.
    pub fn serialize(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), ROW_SIZE);
        LittleEndian::write_u32(&mut buf[ID_OFFSET..USERNAME_OFFSET], self.id);
        write_column(
            &mut buf[USERNAME_OFFSET..EMAIL_OFFSET],
            self.username.as_bytes(),
        );
        write_column(&mut buf[EMAIL_OFFSET..ROW_SIZE], self.email.as_bytes());
    }

    /// Reads back a row written by [`Row::serialize`].
    pub fn deserialize(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), ROW_SIZE);
        let id = LittleEndian::read_u32(&buf[ID_OFFSET..USERNAME_OFFSET]);
        let username = read_column(&buf[USERNAME_OFFSET..EMAIL_OFFSET]);
        let email = read_column(&buf[EMAIL_OFFSET..ROW_SIZE]);
        Self {
            id,
            username,
            email,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

// Copies as much of `value` as fits and zeroes the rest of the column.
fn write_column(column: &mut [u8], value: &[u8]) {
    let len = value.len().min(column.len());
    column[..len].copy_from_slice(&value[..len]);
    column[len..].fill(0);
}

fn read_column(column: &[u8]) -> String {
    let end = column.iter().position(|&b| b == 0).unwrap_or(column.len());
    String::from_utf8_lossy(&column[..end]).into()
}
