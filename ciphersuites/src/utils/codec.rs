/// Wrapper over a slice of bytes that tracks how much has been consumed.
pub struct Reader<'a> {
    buf: &'a [u8],
    offs: usize,
}

impl<'a> Reader<'a> {
    pub fn init(bytes: &'a [u8]) -> Reader<'a> {
        Reader { buf: bytes, offs: 0 }
    }

    pub fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.left() < len {
            return None
        }

        let current = self.offs;
        self.offs += len;
        Some(&self.buf[current..current + len])
    }

    pub fn any_left(&self) -> bool {
        self.offs < self.buf.len()
    }

    pub fn left(&self) -> usize {
        self.buf.len() - self.offs
    }

    pub fn used(&self) -> usize {
        self.offs
    }

    pub fn sub(&mut self, len: usize) -> Option<Reader<'a>> {
        self.take(len).map(|bytes| Reader { buf: bytes, offs: 0 })
    }
}

/// Things we can encode and read from a Reader.
pub trait Codec: Sized {
    fn encode(&self, bytes: &mut Vec<u8>);

    fn read(r: &mut Reader) -> Option<Self>;

    fn get_encoding(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes);
        bytes
    }

    /// Read one value from the whole of `bytes`; trailing data is an error.
    fn read_bytes(bytes: &[u8]) -> Option<Self> {
        let mut rd = Reader::init(bytes);
        Self::read(&mut rd).and_then(|v| {
            if rd.any_left() { None } else { Some(v) }
        })
    }
}

impl Codec for u8 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.push(*self);
    }

    fn read(r: &mut Reader) -> Option<u8> {
        r.take(1).map(|b| b[0])
    }
}

impl Codec for u16 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.to_be_bytes());
    }

    fn read(r: &mut Reader) -> Option<u16> {
        r.take(2).map(|b| u16::from_be_bytes([b[0], b[1]]))
    }
}

/// Encode `items` as a vector with a u16 byte-length prefix.
///
/// Returns the body length, or `None` with `bytes` untouched when the body
/// does not fit the prefix.
pub fn encode_vec_u16<T: Codec>(bytes: &mut Vec<u8>, items: &[T]) -> Option<usize> {
    let mut sub = Vec::new();
    for i in items {
        i.encode(&mut sub);
    }

    let len = u16::try_from(sub.len()).ok()?;
    len.encode(bytes);
    bytes.append(&mut sub);
    Some(len as usize)
}

/// Read a vector with a u16 byte-length prefix.
pub fn read_vec_u16<T: Codec>(r: &mut Reader) -> Option<Vec<T>> {
    let len = u16::read(r)? as usize;
    let mut sub = r.sub(len)?;
    let mut ret = Vec::new();

    while sub.any_left() {
        ret.push(T::read(&mut sub)?);
    }

    Some(ret)
}
