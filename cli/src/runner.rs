use std::sync::Arc;

use anyhow::{Context, Result};
use matchup_battle::BattleEngine;
use matchup_protocol::{CalcResponse, ErrorKind, ErrorResponse, parse_request};
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// One output document: a calculation or the error that replaced it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Calculated(CalcResponse),
    Failed(ErrorResponse),
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize reply")
    }
}

/// Parse and evaluate a single JSON request
pub fn respond(engine: BattleEngine, input: &str) -> Reply {
    let request = match parse_request(input) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected malformed request");
            return Reply::Failed(ErrorResponse::new(ErrorKind::Parse, e.to_string()));
        }
    };

    match engine.handle(&request) {
        Ok(response) => Reply::Calculated(response),
        Err(e) => {
            debug!(kind = %e.kind(), error = %e, "Request failed");
            Reply::Failed(ErrorResponse::new(e.kind(), e.to_string()))
        }
    }
}

/// Evaluate a JSON Lines batch with at most `workers` calculations in flight.
///
/// Blank lines are skipped. Replies come back in input order, and a bad line
/// yields an error reply in its slot without stopping the batch.
pub async fn run_lines(engine: BattleEngine, input: &str, workers: usize) -> Result<Vec<Reply>> {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut handles = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("Worker pool closed")?;
        let line = line.to_string();

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            debug!(line = index + 1, "Evaluating request");
            respond(engine, &line)
        }));
    }

    let mut replies = Vec::with_capacity(handles.len());
    for handle in handles {
        replies.push(handle.await.context("Calculation worker panicked")?);
    }

    let failed = replies.iter().filter(|r| r.is_error()).count();
    info!(total = replies.len(), failed, "Batch complete");

    Ok(replies)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn pokemon(type1: &str, move_type: &str) -> Value {
        json!({
            "level": 50,
            "hp": 100, "attack": 100, "defense": 100,
            "sp_atk": 100, "sp_def": 100, "speed": 100,
            "type1": type1,
            "move_power": 80,
            "move_type": move_type,
            "move_category": "physical"
        })
    }

    fn request_line(type1: &str, move_type: &str) -> String {
        json!({
            "pokemon1": pokemon(type1, move_type),
            "pokemon2": pokemon("normal", "water"),
            "fieldConditions": { "weather": "", "hazards": "", "trickroom": false, "tailwind": "" }
        })
        .to_string()
    }

    #[test]
    fn test_respond_success() {
        let reply = respond(BattleEngine::new(), &request_line("normal", "water"));
        let Reply::Calculated(response) = reply else {
            panic!("expected a calculation, got {reply:?}");
        };
        assert_eq!(response.pokemon1_damage.max, 37);
        assert_eq!(response.pokemon1_damage.min, 31);
    }

    #[test]
    fn test_respond_parse_error() {
        let reply = respond(BattleEngine::new(), "{not json");
        let Reply::Failed(error) = reply else {
            panic!("expected an error, got {reply:?}");
        };
        assert_eq!(error.error.kind, ErrorKind::Parse);
    }

    #[test]
    fn test_respond_validation_error() {
        let line = request_line("normal", "plasma");
        let reply = respond(BattleEngine::new(), &line);
        let Reply::Failed(error) = reply else {
            panic!("expected an error, got {reply:?}");
        };
        assert_eq!(error.error.kind, ErrorKind::Validation);
        assert!(error.error.message.contains("pokemon1"));
    }

    #[test]
    fn test_reply_serializes_untagged() {
        let reply = respond(BattleEngine::new(), "");
        let value: Value = serde_json::from_str(&reply.to_json(false).unwrap()).unwrap();
        assert_eq!(value["error"]["kind"], "parse");

        let reply = respond(BattleEngine::new(), &request_line("normal", "normal"));
        let value: Value = serde_json::from_str(&reply.to_json(true).unwrap()).unwrap();
        assert_eq!(value["pokemon1_damage"]["stab"], true);
        assert!(value.get("error").is_none());
    }

    #[tokio::test]
    async fn test_lines_preserve_order_and_error_slots() {
        let input = [
            request_line("normal", "normal"),
            String::new(),
            "garbage".to_string(),
            "   ".to_string(),
            request_line("normal", "water"),
        ]
        .join("\n");

        let replies = run_lines(BattleEngine::new(), &input, 2).await.unwrap();
        assert_eq!(replies.len(), 3);

        match &replies[0] {
            Reply::Calculated(r) => assert_eq!(r.pokemon1_damage.max, 55),
            other => panic!("unexpected reply {other:?}"),
        }
        assert!(replies[1].is_error());
        match &replies[2] {
            Reply::Calculated(r) => assert_eq!(r.pokemon1_damage.max, 37),
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_lines_match_sequential() {
        let lines: Vec<String> = ["fire", "water", "grass", "ghost", "fighting", "dragon"]
            .iter()
            .map(|t| request_line("normal", t))
            .collect();
        let input = lines.join("\n");

        let engine = BattleEngine::new();
        let sequential: Vec<Reply> = lines.iter().map(|l| respond(engine, l)).collect();
        let concurrent = run_lines(engine, &input, 3).await.unwrap();

        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_lines_empty_input() {
        let replies = run_lines(BattleEngine::new(), "\n\n", 1).await.unwrap();
        assert!(replies.is_empty());
    }
}
