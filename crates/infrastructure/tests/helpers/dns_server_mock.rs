use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// The fixed address every mock answer resolves to.
pub const MOCK_ANSWER_IP: [u8; 4] = [93, 184, 216, 34];

/// Mock DNS server for tests.
///
/// Answers every query with a canned response: one A record pointing at
/// [`MOCK_ANSWER_IP`], echoing the query id and question section. Useful for
/// tests that must not depend on real DNS.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start a mock server on the given port (0 = ephemeral).
    ///
    /// Returns the server handle and the address it is actually listening on.
    pub async fn start(port: u16) -> Result<(Self, SocketAddr), std::io::Error> {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = Self::build_mock_response(&buf[..len]);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build a canned DNS response for the given query bytes.
    fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        // Copy query header
        response.extend_from_slice(&query[0..2]); // Transaction ID

        // Flags: QR=1 (response), RD=1, RA=1
        response.push(0x81); // QR=1, Opcode=0, AA=0, TC=0, RD=1
        response.push(0x80); // RA=1, Z=0, RCODE=0

        // Questions count (from query)
        response.extend_from_slice(&query[4..6]);

        // Answers count: 1
        response.extend_from_slice(&[0x00, 0x01]);

        // Authority RRs: 0
        response.extend_from_slice(&[0x00, 0x00]);

        // Additional RRs: 0
        response.extend_from_slice(&[0x00, 0x00]);

        // Copy question section (rest of query)
        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        // Answer section (A record pointing at the canned address)
        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length: 4 bytes
        ]);
        response.extend_from_slice(&MOCK_ANSWER_IP);

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
