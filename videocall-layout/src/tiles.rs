/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Choosing which peers get a tile and which track each tile shows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::TileDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackKind {
    Audio,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackSource {
    Regular,
    Screen,
}

/// Snapshot of a published track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub kind: TrackKind,
    pub source: TrackSource,
}

/// Snapshot of a peer's published tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerMedia {
    pub peer_id: String,
    #[serde(default)]
    pub video_track: Option<String>,
    #[serde(default)]
    pub audio_track: Option<String>,
    /// Extra tracks such as screen shares.
    #[serde(default)]
    pub auxiliary_tracks: Vec<String>,
}

/// Build one descriptor per peer that should be shown, in peer order.
///
/// A peer gets a placeholder tile when it publishes nothing, or only a known audio
/// track. A known camera track is shown directly. Otherwise, if `show_screen` accepts
/// the peer, its first known screen-share video track is shown; a screen share that
/// only carries audio yields no tile. Peers left over are shown as placeholders only
/// when `show_tile_for_all_peers` is set.
pub fn tiles_from_peers<F>(
    peers: &[PeerMedia],
    tracks: &HashMap<String, TrackInfo>,
    show_screen: F,
    show_tile_for_all_peers: bool,
) -> Vec<TileDescriptor>
where
    F: Fn(&PeerMedia) -> bool,
{
    let mut tiles = Vec::with_capacity(peers.len());
    for peer in peers {
        match (&peer.video_track, &peer.audio_track) {
            (None, None) => {
                tiles.push(TileDescriptor::placeholder(&peer.peer_id));
                continue;
            }
            (None, audio) if known(audio, tracks).is_some() => {
                tiles.push(TileDescriptor::placeholder(&peer.peer_id));
                continue;
            }
            _ => {}
        }

        if let Some(video) = known(&peer.video_track, tracks) {
            tiles.push(TileDescriptor::with_track(&peer.peer_id, video));
        } else if show_screen(peer) && !peer.auxiliary_tracks.is_empty() {
            let screen = peer.auxiliary_tracks.iter().find(|id| {
                tracks.get(*id).is_some_and(|t| {
                    t.kind == TrackKind::Video && t.source == TrackSource::Screen
                })
            });
            match screen {
                Some(track_id) => tiles.push(TileDescriptor::with_track(&peer.peer_id, track_id)),
                None => log::debug!("peer {} shares screen audio only, no tile", peer.peer_id),
            }
        } else if show_tile_for_all_peers {
            tiles.push(TileDescriptor::placeholder(&peer.peer_id));
        }
    }
    tiles
}

/// The track id, if the store knows about it.
fn known<'a>(id: &'a Option<String>, tracks: &HashMap<String, TrackInfo>) -> Option<&'a String> {
    id.as_ref().filter(|id| tracks.contains_key(*id))
}
