//! The set of endpoints laid out on a surface.
//!
//! The board owns its endpoints; drag sessions and connections only hold
//! [`EndpointId`]s, which stop resolving once an endpoint is removed.
//! Endpoints are kept in paint order: the last one is topmost.

use crate::endpoint::Endpoint;
use crate::id::EndpointId;
use kurbo::Point;

#[derive(Debug, Clone, Default)]
pub struct EndpointBoard {
    endpoints: Vec<Endpoint>,
}

impl EndpointBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an endpoint on top. Replaces an existing endpoint with the same id.
    pub fn add(&mut self, endpoint: Endpoint) {
        if let Some(existing) = self.get_mut(endpoint.id) {
            *existing = endpoint;
        } else {
            self.endpoints.push(endpoint);
        }
    }

    pub fn remove(&mut self, id: EndpointId) -> Option<Endpoint> {
        let pos = self.endpoints.iter().position(|ep| ep.id == id)?;
        Some(self.endpoints.remove(pos))
    }

    pub fn get(&self, id: EndpointId) -> Option<&Endpoint> {
        self.endpoints.iter().find(|ep| ep.id == id)
    }

    pub fn get_mut(&mut self, id: EndpointId) -> Option<&mut Endpoint> {
        self.endpoints.iter_mut().find(|ep| ep.id == id)
    }

    pub fn contains(&self, id: EndpointId) -> bool {
        self.get(id).is_some()
    }

    /// Endpoints in paint order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Endpoint> {
        self.endpoints.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Endpoint> {
        self.endpoints.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Center of an endpoint's frame, the anchor of its connections.
    pub fn anchor(&self, id: EndpointId) -> Option<Point> {
        self.get(id).map(Endpoint::center)
    }

    /// True if any endpoint changed state since the last call. Clears all flags.
    pub fn take_needs_display(&mut self) -> bool {
        self.endpoints
            .iter_mut()
            .fold(false, |dirty, ep| ep.take_needs_display() | dirty)
    }
}
