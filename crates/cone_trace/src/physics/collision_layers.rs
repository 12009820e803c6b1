//! Collision channels and object-type filtering for queries
//!
//! Every collidable object belongs to exactly one object channel. An object
//! query carries the set of channels it wants to see as a `CollisionLayers`
//! mask. Trace-only channels (visibility, camera) describe how a query
//! *responds*, not what an object *is*, and are rejected for object queries.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Collision layer mask used for efficient filtering
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CollisionLayers: u32 {
        /// Static environment geometry
        const WORLD_STATIC = 1 << 0;
        /// Moving environment geometry
        const WORLD_DYNAMIC = 1 << 1;
        /// Player and AI controlled bodies
        const PAWN = 1 << 2;
        /// Simulated rigid bodies
        const PHYSICS_BODY = 1 << 3;
        /// Vehicles
        const VEHICLE = 1 << 4;
        /// Destructible geometry
        const DESTRUCTIBLE = 1 << 5;
        // Bits 6..24 are reserved for game-defined object channels
    }
}

/// Number of game-defined object channels
pub const GAME_CHANNEL_COUNT: u8 = 18;

/// First bit used by game-defined object channels
const GAME_CHANNEL_FIRST_BIT: u32 = 6;

/// A collision channel as requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionChannel {
    /// Static environment geometry
    WorldStatic,
    /// Moving environment geometry
    WorldDynamic,
    /// Player and AI controlled bodies
    Pawn,
    /// Simulated rigid bodies
    PhysicsBody,
    /// Vehicles
    Vehicle,
    /// Destructible geometry
    Destructible,
    /// Trace-only visibility channel
    Visibility,
    /// Trace-only camera channel
    Camera,
    /// Game-defined object channel `0..GAME_CHANNEL_COUNT`
    Game(u8),
}

impl CollisionChannel {
    /// Layer bit for this channel, or `None` when the channel cannot be used
    /// to filter objects
    pub fn object_layer(self) -> Option<CollisionLayers> {
        match self {
            Self::WorldStatic => Some(CollisionLayers::WORLD_STATIC),
            Self::WorldDynamic => Some(CollisionLayers::WORLD_DYNAMIC),
            Self::Pawn => Some(CollisionLayers::PAWN),
            Self::PhysicsBody => Some(CollisionLayers::PHYSICS_BODY),
            Self::Vehicle => Some(CollisionLayers::VEHICLE),
            Self::Destructible => Some(CollisionLayers::DESTRUCTIBLE),
            Self::Visibility | Self::Camera => None,
            Self::Game(index) if index < GAME_CHANNEL_COUNT => Some(
                CollisionLayers::from_bits_retain(1 << (GAME_CHANNEL_FIRST_BIT + u32::from(index))),
            ),
            Self::Game(_) => None,
        }
    }

    /// Check if this channel may be used in an object query
    pub fn is_valid_object_query(self) -> bool {
        self.object_layer().is_some()
    }
}

/// The set of object channels a query reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectQueryParams {
    layers: CollisionLayers,
}

impl ObjectQueryParams {
    /// Query exactly the given layers
    pub fn new(layers: CollisionLayers) -> Self {
        Self { layers }
    }

    /// Build query params from caller-supplied channels.
    ///
    /// Returns the params built from the valid channels together with the
    /// channels that were rejected.
    pub fn from_channels(channels: &[CollisionChannel]) -> (Self, Vec<CollisionChannel>) {
        let mut params = Self::default();
        let mut rejected = Vec::new();

        for &channel in channels {
            match channel.object_layer() {
                Some(layer) => params.layers |= layer,
                None => rejected.push(channel),
            }
        }

        (params, rejected)
    }

    /// Add a channel; returns `false` if the channel is not an object channel
    pub fn add_channel(&mut self, channel: CollisionChannel) -> bool {
        match channel.object_layer() {
            Some(layer) => {
                self.layers |= layer;
                true
            }
            None => false,
        }
    }

    /// A query with no layers can never report anything
    pub fn is_valid(&self) -> bool {
        !self.layers.is_empty()
    }

    /// Layers queried
    pub fn layers(&self) -> CollisionLayers {
        self.layers
    }

    /// Check if an object on `channel` is reported by this query
    pub fn accepts(&self, channel: CollisionChannel) -> bool {
        channel
            .object_layer()
            .is_some_and(|layer| self.layers.intersects(layer))
    }
}
