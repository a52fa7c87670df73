//! Append-only BLAKE3 hash chain over vesting events.
//! head_n = blake3(head_{n-1} || bytes_of(record_n)), head_0 = [0; 32].

use anchor_lang::prelude::Pubkey;
use bytemuck::{Pod, Zeroable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum AuditKind {
    Added = 1,
    Released = 2,
}

/// Fixed 64-byte preimage; field order is part of the chain format.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AuditRecord {
    pub seq: u64,
    pub kind: u64,
    pub investor: [u8; 32],
    pub amount: u64,
    pub timestamp: i64,
}

impl AuditRecord {
    pub fn new(seq: u64, kind: AuditKind, investor: &Pubkey, amount: u64, timestamp: i64) -> Self {
        Self {
            seq: seq.to_le(),
            kind: (kind as u64).to_le(),
            investor: investor.to_bytes(),
            amount: amount.to_le(),
            timestamp: timestamp.to_le(),
        }
    }
}

pub fn chain(head: &[u8; 32], record: &AuditRecord) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(head);
    hasher.update(bytemuck::bytes_of(record));
    *hasher.finalize().as_bytes()
}
