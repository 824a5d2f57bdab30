//! The odyssey entity: one addressable "planet" in the explorer.

use std::fmt;

use odyssey_common::Vec3;

/// A one-directional reference to another odyssey by id.
///
/// Not validated: the target may not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub id: u32,
}

/// Domain data for one odyssey.
///
/// The sphere that draws it is owned by the renderer; `texture` is the
/// palette index it should be drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Odyssey {
    pub id: u32,
    pub wallet: String,
    pub name: String,
    pub url: String,
    pub texture: usize,
    pub position: Vec3,
    pub connections: Vec<Connection>,
}

impl Odyssey {
    pub fn new(
        id: u32,
        wallet: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        texture: usize,
    ) -> Self {
        Self {
            id,
            wallet: wallet.into(),
            name: name.into(),
            url: url.into(),
            texture,
            position: [0.0; 3],
            connections: Vec::new(),
        }
    }

    /// Record an outgoing connection.
    pub fn connect(&mut self, id: u32) {
        self.connections.push(Connection { id });
    }
}

impl fmt::Display for Odyssey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<u32> = self.connections.iter().map(|c| c.id).collect();
        write!(
            f,
            "ID:{} Wallet:{} Webaddress:{} Connected: {:?}",
            self.id, self.wallet, self.url, ids
        )
    }
}
