/// A fully collected object body, paired with the byte count the transport
/// claimed to have delivered. The two can disagree if the client returned a
/// partial body, which is exactly what the downloader checks for.
#[derive(Clone, Debug)]
pub struct DownloadedObject {
    pub reported_len: i64,
    pub bytes: Vec<u8>,
}
