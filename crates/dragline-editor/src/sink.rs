use dragline_core::connection::Connection;

/// Receiver of committed connections.
///
/// What a connection means is up to the application; the drag machinery only
/// reports the pair once per successful drop.
pub trait ConnectionSink {
    fn connect(&mut self, connection: &Connection);
}

/// Logs and collects connections, e.g. to paint them afterwards.
impl ConnectionSink for Vec<Connection> {
    fn connect(&mut self, connection: &Connection) {
        log::info!("connect {} to {}", connection.source, connection.target);
        self.push(*connection);
    }
}
