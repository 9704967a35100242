// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use flashcards_core::Card;
use flashcards_core::CardId;
use flashcards_core::CardRequest;
use flashcards_core::Folder;
use flashcards_core::FolderId;
use flashcards_core::PageRequest;
use flashcards_core::Timestamp;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Row;
use rusqlite::params;
use rusqlite::types::Type;

/// Path that selects an in-memory database instead of a file.
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = "
    pragma foreign_keys = on;

    create table if not exists folders (
        id integer primary key autoincrement,
        name text not null,
        created_at text not null
    ) strict;

    create table if not exists cards (
        id integer primary key autoincrement,
        folder_id integer not null references folders (id) on delete cascade,
        question text not null,
        answer text not null,
        created_at text not null,
        updated_at text not null
    ) strict;

    create index if not exists cards_folder_id on cards (folder_id);
";

const CARD_COLUMNS: &str = "id, folder_id, question, answer, created_at, updated_at";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path`, or an in-memory
    /// database if `path` is [`IN_MEMORY`].
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = if path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.execute_batch(SCHEMA)?;
        log::debug!("Opened database at {path}");
        Ok(Self { conn })
    }

    pub fn insert_folder(&self, name: &str, now: Timestamp) -> rusqlite::Result<Folder> {
        self.conn.execute(
            "insert into folders (name, created_at) values (?, ?);",
            params![name, now.to_string()],
        )?;
        Ok(Folder {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
        })
    }

    pub fn folders(&self) -> rusqlite::Result<Vec<Folder>> {
        let mut stmt = self
            .conn
            .prepare("select id, name, created_at from folders order by id;")?;
        let rows = stmt.query_map([], read_folder)?;
        rows.collect()
    }

    pub fn get_folder(&self, id: FolderId) -> rusqlite::Result<Option<Folder>> {
        self.conn
            .query_row(
                "select id, name, created_at from folders where id = ?;",
                [id],
                read_folder,
            )
            .optional()
    }

    /// Delete a folder and, through the foreign key, all of its cards.
    /// Returns whether a folder was deleted.
    pub fn delete_folder(&self, id: FolderId) -> rusqlite::Result<bool> {
        let n = self
            .conn
            .execute("delete from folders where id = ?;", [id])?;
        Ok(n > 0)
    }

    pub fn insert_card(
        &self,
        folder_id: FolderId,
        request: &CardRequest,
        now: Timestamp,
    ) -> rusqlite::Result<Card> {
        self.conn.execute(
            "insert into cards (folder_id, question, answer, created_at, updated_at) values (?, ?, ?, ?, ?);",
            params![
                folder_id,
                request.question,
                request.answer,
                now.to_string(),
                now.to_string()
            ],
        )?;
        Ok(Card {
            id: self.conn.last_insert_rowid(),
            folder_id,
            question: request.question.clone(),
            answer: request.answer.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite the content of a card. Returns `None` if the card does not
    /// exist in the given folder.
    pub fn update_card(
        &self,
        folder_id: FolderId,
        card_id: CardId,
        request: &CardRequest,
        now: Timestamp,
    ) -> rusqlite::Result<Option<Card>> {
        let n = self.conn.execute(
            "update cards set question = ?, answer = ?, updated_at = ? where id = ? and folder_id = ?;",
            params![
                request.question,
                request.answer,
                now.to_string(),
                card_id,
                folder_id
            ],
        )?;
        if n == 0 {
            return Ok(None);
        }
        self.get_card(folder_id, card_id)
    }

    pub fn get_card(&self, folder_id: FolderId, card_id: CardId) -> rusqlite::Result<Option<Card>> {
        let sql = format!("select {CARD_COLUMNS} from cards where id = ? and folder_id = ?;");
        self.conn
            .query_row(&sql, params![card_id, folder_id], read_card)
            .optional()
    }

    /// The cards in a folder, oldest first.
    pub fn cards_in_folder(
        &self,
        folder_id: FolderId,
        page: PageRequest,
    ) -> rusqlite::Result<Vec<Card>> {
        let Some(offset) = page.offset() else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "select {CARD_COLUMNS} from cards where folder_id = ? order by id limit ? offset ?;"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![folder_id, page.size as i64, offset],
            read_card,
        )?;
        rows.collect()
    }

    pub fn count_cards(&self, folder_id: FolderId) -> rusqlite::Result<usize> {
        let count: i64 = self.conn.query_row(
            "select count(*) from cards where folder_id = ?;",
            [folder_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Returns whether a card was deleted.
    pub fn delete_card(&self, folder_id: FolderId, card_id: CardId) -> rusqlite::Result<bool> {
        let n = self.conn.execute(
            "delete from cards where id = ? and folder_id = ?;",
            params![card_id, folder_id],
        )?;
        Ok(n > 0)
    }
}

fn read_folder(row: &Row) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: read_timestamp(row, 2)?,
    })
}

fn read_card(row: &Row) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        folder_id: row.get(1)?,
        question: row.get(2)?,
        answer: row.get(3)?,
        created_at: read_timestamp(row, 4)?,
        updated_at: read_timestamp(row, 5)?,
    })
}

fn read_timestamp(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    let text: String = row.get(idx)?;
    Timestamp::try_from(text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
