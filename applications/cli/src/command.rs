//! Command tokenizer
//!
//! A line is empty, a single command character, or a command character
//! followed by `=<value>`. The value is the literal rest of the line; `=`
//! inside it is not special.

use thiserror::Error;

/// Help menu printed before each prompt
pub const MENU: &str = "\
Song Commands:
   >[=n]  Play, where n is the song number
          n is optional and by default plays the current song
   !      Pause
   p      Previous
   n      Next
Volume Commands:
   m      Mute volume toggle
   +      Increase volume
   -      Decrease volume
Playlist Commands:
   a=f    Add song named f from Music directory to playlist
          include the file extension. Do not escape or quote
   d[=n]  Delete song numbered n from playlist
          n is optional and the default is the current song
   C      Current playlist
   D      Delete all songs from the playlist
   f=s    Find and play the first song containing the string s
   I[=n]  Initialize playlist named n from Music directory
          n is optional and the default is the default playlist
   L=n    Load saved playlist named n
   P      List playlists
   R[=n]  Remove playlist named n
          n is optional and the default is current playlist
   s[=s]  Show all songs or just songs containing the string s
   S[=n]  Save playlist named n
          n is optional and the default is current playlist
Exit Commands:
   o      Power off the host
   x      Exit and leave music playing
 Return   Press Enter or Return key to exit and turn off music";

/// What a command does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `>` / `>=n`
    Play,
    /// `!`
    Pause,
    /// `p`
    Previous,
    /// `n`
    Next,
    /// `m`
    ToggleMute,
    /// `+`
    VolumeUp,
    /// `-`
    VolumeDown,
    /// `a=f`
    AddTrack,
    /// `d` / `d=n`
    DeleteTrack,
    /// `C`
    ShowPlaylist,
    /// `D`
    ClearPlaylist,
    /// `f=s`
    FindAndPlay,
    /// `I` / `I=n`
    InitPlaylist,
    /// `L=n`
    LoadPlaylist,
    /// `P`
    ListPlaylists,
    /// `R` / `R=n`
    RemovePlaylist,
    /// `s` / `s=s`
    ListTracks,
    /// `S` / `S=n`
    SavePlaylist,
    /// `x`: exit, leave playback running
    Exit,
    /// `o`: exit and power off
    PowerOff,
    /// Empty line: exit and stop playback
    Quit,
}

impl Verb {
    /// Map a command character to its verb
    pub fn from_char(c: char) -> Option<Self> {
        let verb = match c {
            '>' => Verb::Play,
            '!' => Verb::Pause,
            'p' => Verb::Previous,
            'n' => Verb::Next,
            'm' => Verb::ToggleMute,
            '+' => Verb::VolumeUp,
            '-' => Verb::VolumeDown,
            'a' => Verb::AddTrack,
            'd' => Verb::DeleteTrack,
            'C' => Verb::ShowPlaylist,
            'D' => Verb::ClearPlaylist,
            'f' => Verb::FindAndPlay,
            'I' => Verb::InitPlaylist,
            'L' => Verb::LoadPlaylist,
            'P' => Verb::ListPlaylists,
            'R' => Verb::RemovePlaylist,
            's' => Verb::ListTracks,
            'S' => Verb::SavePlaylist,
            'x' => Verb::Exit,
            'o' => Verb::PowerOff,
            _ => return None,
        };
        Some(verb)
    }

    /// Whether the `=<value>` form is accepted
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            Verb::Play
                | Verb::AddTrack
                | Verb::DeleteTrack
                | Verb::FindAndPlay
                | Verb::InitPlaylist
                | Verb::LoadPlaylist
                | Verb::RemovePlaylist
                | Verb::ListTracks
                | Verb::SavePlaylist
        )
    }
}

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,

    /// Value after `=`; `None` when absent or empty
    pub argument: Option<String>,
}

/// Line that does not match the command grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized command: {0}")]
pub struct UnrecognizedCommand(pub String);

impl Command {
    pub fn new(verb: Verb, argument: Option<&str>) -> Self {
        Self {
            verb,
            argument: argument.map(str::to_string),
        }
    }

    /// Tokenize one input line
    pub fn parse(line: &str) -> Result<Self, UnrecognizedCommand> {
        let line = line.trim_end_matches(['\r', '\n']);
        let unrecognized = || UnrecognizedCommand(line.to_string());

        let mut chars = line.chars();
        let Some(first) = chars.next() else {
            return Ok(Self::new(Verb::Quit, None));
        };

        let verb = Verb::from_char(first).ok_or_else(unrecognized)?;
        let rest = chars.as_str();

        if rest.is_empty() {
            return Ok(Self::new(verb, None));
        }

        match rest.strip_prefix('=') {
            Some(value) if verb.takes_argument() => {
                Ok(Self::new(verb, Some(value).filter(|v| !v.is_empty())))
            }
            _ => Err(unrecognized()),
        }
    }
}
