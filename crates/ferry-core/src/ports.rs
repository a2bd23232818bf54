//! Port numbers carried by an offer.
use ferry_model::{
    Offer, PORTS_RESOURCE,
    wire::{OfferId, ValueType},
};

/// Highest valid TCP/UDP port. Ranges reaching past it are truncated.
const MAX_PORT: u64 = u16::MAX as u64;

/// Flatten every range of the offer's `ports` resource into an ascending list.
///
/// An offer without a ports resource yields an empty list: callers treat that as
/// "no ports available", not as an error.
pub fn ports(offer: &Offer) -> Vec<u32> {
    let mut out: Vec<u32> = offer
        .resources
        .iter()
        .filter(|r| r.name == PORTS_RESOURCE && r.kind == ValueType::Ranges)
        .filter_map(|r| r.ranges.as_ref())
        .flat_map(|ranges| ranges.range.iter())
        .filter(|r| r.begin <= r.end && r.begin <= MAX_PORT)
        .flat_map(|r| r.begin..=r.end.min(MAX_PORT))
        .map(|p| p as u32)
        .collect();

    out.sort_unstable();
    out.dedup();
    out
}

/// Cursor over the ports of one offer.
///
/// Every call to [`PortAllocator::next`] hands out a port not handed out before, so
/// descriptors built through the same allocator never collide on a host port.
#[derive(Debug, Clone)]
pub struct PortAllocator {
    offer_id: OfferId,
    ports: Vec<u32>,
    cursor: usize,
}

impl PortAllocator {
    /// Start a fresh cursor at the offer's lowest port.
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            offer_id: offer.id.clone(),
            ports: ports(offer),
            cursor: 0,
        }
    }

    /// Offer this allocator draws from.
    pub fn offer_id(&self) -> &OfferId {
        &self.offer_id
    }

    /// `true` when the offer carried no ports at all.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Ports not handed out yet.
    pub fn remaining(&self) -> usize {
        self.ports.len() - self.cursor
    }

    /// Hand out the next unused port, `None` once the offer is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u32> {
        let port = self.ports.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(port)
    }
}
