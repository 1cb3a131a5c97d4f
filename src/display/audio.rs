//! Cry playback. Fire and forget: the caller never waits on audio.

use crate::core::services::PokedexService;
use crate::error::DisplayError;

/// What happened to a cry request, for the caller to tell the user.
#[derive(Debug, Clone, PartialEq)]
pub enum CryPlayback {
    /// Playback was started in the background.
    Started,
    /// Built without audio support; the URL is all we can offer.
    Unsupported { url: String },
}

/// Start playing the cry at `url` without blocking.
///
/// With the `audio` feature the clip is downloaded and decoded on a blocking
/// worker; failures are logged and otherwise ignored.
pub fn play_cry(service: &PokedexService, url: &str) -> CryPlayback {
    #[cfg(feature = "audio")]
    {
        let service = service.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            let bytes = match service.fetch_cry(&url).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Error downloading cry from {}: {}", url, e);
                    return;
                }
            };
            match tokio::task::spawn_blocking(move || play_ogg(bytes)).await {
                Ok(Ok(())) => log::debug!("Finished playing {}", url),
                Ok(Err(e)) => log::warn!("Error playing cry: {}", e),
                Err(e) => log::warn!("Audio worker failed: {}", e),
            }
        });
        CryPlayback::Started
    }

    #[cfg(not(feature = "audio"))]
    {
        let _ = service;
        log::debug!("Audio support not compiled in; offering {}", url);
        CryPlayback::Unsupported {
            url: url.to_string(),
        }
    }
}

#[cfg(feature = "audio")]
fn play_ogg(bytes: Vec<u8>) -> Result<(), DisplayError> {
    let cursor = std::io::Cursor::new(bytes);
    let (_stream, handle) =
        rodio::OutputStream::try_default().map_err(|e| DisplayError::Audio(e.to_string()))?;
    let sink = rodio::Sink::try_new(&handle).map_err(|e| DisplayError::Audio(e.to_string()))?;
    let source = rodio::Decoder::new(cursor).map_err(|e| DisplayError::Audio(e.to_string()))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

/// Message shown when playback can't happen here.
pub fn unsupported_message(url: &str) -> String {
    let error = DisplayError::Audio(format!("built without audio support, cry is at {}", url));
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::PokeApiClient;

    #[cfg(not(feature = "audio"))]
    #[test]
    fn test_play_cry_without_audio_reports_url() {
        let client = PokeApiClient::new("http://localhost".to_string()).unwrap();
        let service = PokedexService::new(client);
        assert_eq!(
            play_cry(&service, "https://example.com/25.ogg"),
            CryPlayback::Unsupported {
                url: "https://example.com/25.ogg".to_string()
            }
        );
    }

    #[test]
    fn test_unsupported_message_names_url() {
        assert!(unsupported_message("https://example.com/25.ogg").contains("25.ogg"));
    }
}
