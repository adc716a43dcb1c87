//! Registry mapping hash algorithm ids to digest constructors

use crate::error::HuntError;
use digest::DynDigest;
use md4::Md4;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use whirlpool::Whirlpool;

/// Hash algorithm selection. Discriminants are the command-line ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashKind {
    Md5 = 0,
    Sha1 = 1,
    #[default]
    Sha256 = 2,
    Sha512 = 3,
    Md4 = 4,
    Ripemd160 = 5,
    Sha3_224 = 6,
    Sha3_256 = 7,
    Sha3_384 = 8,
    Sha3_512 = 9,
    Whirlpool = 10,
}

/// One row of the registry table, indexed by `HashKind as usize`.
struct Entry {
    kind: HashKind,
    name: &'static str,
    /// Digest length in bytes.
    digest_len: usize,
    build: fn() -> Box<dyn DynDigest + Send>,
}

fn build<D: DynDigest + Default + Send + 'static>() -> Box<dyn DynDigest + Send> {
    Box::new(D::default())
}

#[rustfmt::skip]
const REGISTRY: &[Entry] = &[
    Entry { kind: HashKind::Md5, name: "MD5", digest_len: 16, build: build::<Md5> },
    Entry { kind: HashKind::Sha1, name: "SHA1", digest_len: 20, build: build::<Sha1> },
    Entry { kind: HashKind::Sha256, name: "SHA256", digest_len: 32, build: build::<Sha256> },
    Entry { kind: HashKind::Sha512, name: "SHA512", digest_len: 64, build: build::<Sha512> },
    Entry { kind: HashKind::Md4, name: "MD4", digest_len: 16, build: build::<Md4> },
    Entry { kind: HashKind::Ripemd160, name: "RIPEMD160", digest_len: 20, build: build::<Ripemd160> },
    Entry { kind: HashKind::Sha3_224, name: "SHA3-224", digest_len: 28, build: build::<Sha3_224> },
    Entry { kind: HashKind::Sha3_256, name: "SHA3-256", digest_len: 32, build: build::<Sha3_256> },
    Entry { kind: HashKind::Sha3_384, name: "SHA3-384", digest_len: 48, build: build::<Sha3_384> },
    Entry { kind: HashKind::Sha3_512, name: "SHA3-512", digest_len: 64, build: build::<Sha3_512> },
    Entry { kind: HashKind::Whirlpool, name: "WHIRLPOOL", digest_len: 64, build: build::<Whirlpool> },
];

impl HashKind {
    /// Every supported algorithm, in id order.
    pub fn all() -> impl Iterator<Item = HashKind> {
        REGISTRY.iter().map(|e| e.kind)
    }

    fn entry(self) -> &'static Entry {
        &REGISTRY[self as usize]
    }

    /// Numeric id used on the command line.
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Display name, e.g. "SHA3-256".
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Digest size in bytes.
    pub fn digest_len(self) -> usize {
        self.entry().digest_len
    }

    /// Number of hex characters in an encoded digest.
    pub fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Build a fresh hasher for this algorithm.
    pub fn hasher(self) -> Hasher {
        Hasher {
            kind: self,
            inner: (self.entry().build)(),
        }
    }
}

impl std::fmt::Display for HashKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for HashKind {
    type Err = HuntError;

    /// Accepts either a numeric id ("2") or a name ("sha256", "SHA3-256").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u32>() {
            return select_hash(id);
        }
        let wanted = s.to_ascii_uppercase().replace(['_', '-'], "");
        REGISTRY
            .iter()
            .find(|e| e.name.replace('-', "") == wanted)
            .map(|e| e.kind)
            .ok_or_else(|| HuntError::UnknownHashName(s.to_string()))
    }
}

/// Look up an algorithm by its numeric id.
pub fn select_hash(id: u32) -> Result<HashKind, HuntError> {
    REGISTRY
        .get(id as usize)
        .map(|e| e.kind)
        .ok_or(HuntError::UnknownHashId(id))
}

/// A reusable digest instance. Each call to [`Hasher::digest`] starts from a
/// clean state, so nothing carries over between candidates.
pub struct Hasher {
    kind: HashKind,
    inner: Box<dyn DynDigest + Send>,
}

impl Hasher {
    pub fn kind(&self) -> HashKind {
        self.kind
    }

    /// Hash `data` and reset for the next call.
    pub fn digest(&mut self, data: &[u8]) -> Box<[u8]> {
        self.inner.update(data);
        self.inner.finalize_reset()
    }

    /// Hash `data` and return the lowercase hex digest.
    pub fn digest_hex(&mut self, data: &[u8]) -> String {
        hex::encode(self.digest(data))
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hasher").field("kind", &self.kind).finish()
    }
}
