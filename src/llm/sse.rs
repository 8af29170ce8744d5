//! SSE (Server-Sent Events) decoding for chat-completion streams.
//!
//! Providers deliver streamed completions as `data:` lines terminated by a
//! `data: [DONE]` sentinel. The decoder buffers partial network chunks and
//! hands back complete frames.

use serde::de::DeserializeOwned;

/// SSE stream decoder with buffering.
///
/// Buffer is bounded to prevent unbounded memory growth from a malformed
/// upstream that never sends a newline.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: String,
}

impl SseDecoder {
    /// Maximum buffer size (1MB)
    const MAX_BUFFER_SIZE: usize = 1024 * 1024;

    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Push a chunk of bytes and extract complete SSE frames.
    ///
    /// Incomplete trailing data is buffered for the next push.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.push_str(&String::from_utf8_lossy(chunk));

        if self.buffer.len() > Self::MAX_BUFFER_SIZE {
            tracing::warn!(
                "SSE buffer exceeded {}KB limit, truncating",
                Self::MAX_BUFFER_SIZE / 1024
            );
            let keep_from = self.buffer.len() - (Self::MAX_BUFFER_SIZE / 2);
            self.buffer = self.buffer[keep_from..].to_string();
        }

        let mut frames = Vec::new();

        while let Some(pos) = self.buffer.find('\n') {
            let line = self.buffer[..pos].trim().to_string();
            self.buffer = self.buffer[pos + 1..].to_string();

            if line.is_empty() {
                continue;
            }

            // Only data lines carry completion payloads; event:/id:/retry: are ignored
            if let Some(data) = line.strip_prefix("data: ") {
                frames.push(SseFrame {
                    data: data.to_string(),
                });
            }
        }

        frames
    }

    /// Push a string directly (for testing)
    #[cfg(test)]
    pub fn push_str(&mut self, s: &str) -> Vec<SseFrame> {
        self.push(s.as_bytes())
    }

    /// Check if there's remaining buffered data
    #[cfg(test)]
    pub fn has_remaining(&self) -> bool {
        !self.buffer.is_empty()
    }
}

/// A complete SSE frame (one `data:` line, prefix stripped)
#[derive(Debug, Clone)]
pub struct SseFrame {
    pub data: String,
}

impl SseFrame {
    /// Check if this is the [DONE] sentinel
    pub fn is_done(&self) -> bool {
        self.data == "[DONE]"
    }

    /// Try to parse the frame data as JSON, returning None on failure
    pub fn try_parse<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_basic_decode() {
        let mut decoder = SseDecoder::new();

        let frames = decoder.push_str("data: {\"text\": \"hello\"}\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "{\"text\": \"hello\"}");
    }

    #[test]
    fn test_done_frame() {
        let mut decoder = SseDecoder::new();

        let frames = decoder.push_str("data: [DONE]\n");
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_done());
    }

    #[test]
    fn test_partial_chunks() {
        let mut decoder = SseDecoder::new();

        let frames1 = decoder.push_str("data: {\"part\":");
        assert!(frames1.is_empty());
        assert!(decoder.has_remaining());

        let frames2 = decoder.push_str(" 1}\n");
        assert_eq!(frames2.len(), 1);
        assert_eq!(frames2[0].data, "{\"part\": 1}");
    }

    #[test]
    fn test_multiple_frames() {
        let mut decoder = SseDecoder::new();

        let frames = decoder.push_str("data: first\ndata: second\ndata: third\n");
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].data, "first");
        assert_eq!(frames[2].data, "third");
    }

    #[test]
    fn test_non_data_lines_ignored() {
        let mut decoder = SseDecoder::new();

        let frames = decoder.push_str(": keepalive\nevent: message\ndata: content\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "content");
    }

    #[test]
    fn test_try_parse() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct TestData {
            value: i32,
        }

        let mut decoder = SseDecoder::new();
        let frames = decoder.push_str("data: {\"value\": 42}\ndata: not-json\n");

        let parsed: Option<TestData> = frames[0].try_parse();
        assert_eq!(parsed, Some(TestData { value: 42 }));
        let bad: Option<TestData> = frames[1].try_parse();
        assert!(bad.is_none());
    }
}
