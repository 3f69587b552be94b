//! Command execution against an address book.

use crate::book::{AddressBook, RecordMut};
use crate::commands::parser::{Command, HELP_TEXT};
use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{BirthdayCountdown, Record};
use crate::repositories::AddressBookRepository;
use std::io;
use tracing::{debug, info};

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user.
    Text(String),
    /// The user asked to leave; the book has been saved.
    Exit(String),
}

/// An address book bound to the repository it is saved to.
pub struct Session {
    book: AddressBook,
    repository: Box<dyn AddressBookRepository>,
}

impl Session {
    /// Create a session with an empty book.
    pub fn new(repository: Box<dyn AddressBookRepository>, records_per_page: usize) -> Self {
        Self {
            book: AddressBook::new(records_per_page),
            repository,
        }
    }

    /// Create a session and load whatever the repository holds.
    ///
    /// A missing data file is not an error; the session starts empty.
    pub fn open(
        repository: Box<dyn AddressBookRepository>,
        records_per_page: usize,
    ) -> AddressBookResult<Self> {
        let mut session = Self::new(repository, records_per_page);
        match session.book.load_from(session.repository.as_ref()) {
            Ok(count) => info!(records = count, "Loaded existing contacts"),
            Err(AddressBookError::FileAccess { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                info!("No data file yet, starting with an empty address book");
            }
            Err(e) => return Err(e),
        }
        Ok(session)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Persist the book through the session's repository.
    pub fn save(&self) -> AddressBookResult<()> {
        self.book.save_to(self.repository.as_ref())
    }

    /// Execute one command.
    ///
    /// All arguments are validated before anything is changed.
    pub fn execute(&mut self, command: Command) -> AddressBookResult<Reply> {
        debug!(?command, "Executing command");

        let text = match command {
            Command::Add { name, phone } => self.add(name, phone)?,
            Command::DeletePhone { name, phone } => {
                let phone = Phone::new(phone)?;
                self.record_mut(&name)?.delete_phone(&phone)?;
                format!("Phone {} removed from {}", phone, name)
            }
            Command::SetPhones { name, phones } => {
                let phones = phones
                    .into_iter()
                    .map(Phone::new)
                    .collect::<Result<Vec<_>, _>>()?;
                let count = phones.len();
                self.record_mut(&name)?.modify_phone(phones);
                format!("{} now has {} phone(s)", name, count)
            }
            Command::SetBirthday { name, birthday } => {
                let birthday = Birthday::new(&birthday)?;
                self.record_mut(&name)?.set_birthday(Some(birthday));
                format!("Birthday of {} set to {}", name, birthday)
            }
            Command::Days { name } => match self.record(&name)?.days_to_birthday() {
                BirthdayCountdown::Days(0) => format!("{}'s birthday is today", name),
                BirthdayCountdown::Days(days) => {
                    format!("{} days until {}'s birthday", days, name)
                }
                countdown @ BirthdayCountdown::NotProvided => countdown.to_string(),
            },
            Command::Show { name } => self.record(&name)?.to_string(),
            Command::Search { query } => self.search(&query),
            Command::List { page_size } => self.list(page_size),
            Command::Save => {
                self.save()?;
                format!("Saved {} contact(s)", self.book.len())
            }
            Command::Load => {
                let count = self.book.reload_from(self.repository.as_ref())?;
                format!("Loaded {} contact(s)", count)
            }
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => {
                self.save()?;
                return Ok(Reply::Exit("Good bye!".to_string()));
            }
        };

        Ok(Reply::Text(text))
    }

    fn add(&mut self, name: String, phone: Option<String>) -> AddressBookResult<String> {
        let name = ContactName::new(name)?;
        let phone = phone.map(Phone::new).transpose()?;

        if let Some(mut record) = self.book.get_mut(name.as_str()) {
            return Ok(match phone {
                Some(phone) => {
                    record.add_phone(phone);
                    format!("Phone added to {}", name)
                }
                None => format!("Contact {} already exists", name),
            });
        }

        let message = format!("Contact {} added", name);
        let record = match phone {
            Some(phone) => Record::new(name).with_phone(phone),
            None => Record::new(name),
        };
        self.book.add_record(record);
        Ok(message)
    }

    fn search(&self, query: &str) -> String {
        let matches = self.book.search(query);
        if matches.is_empty() {
            return format!("No matching contacts found for '{}'.", query);
        }

        let mut lines = vec![format!("Matching contacts for '{}':", query)];
        lines.extend(matches.iter().map(|record| record.to_string()));
        lines.join("\n")
    }

    fn list(&self, page_size: Option<usize>) -> String {
        if self.book.is_empty() {
            return "Address book is empty".to_string();
        }

        let pages = match page_size {
            Some(size) => self.book.iterator(size),
            None => self.book.pages(),
        };

        let mut lines = Vec::new();
        for (index, page) in pages.enumerate() {
            lines.push(format!("Page {}:", index + 1));
            lines.extend(page.iter().map(|record| format!("  {}", record)));
        }
        lines.join("\n")
    }

    fn record(&self, name: &str) -> AddressBookResult<&Record> {
        self.book
            .get(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> AddressBookResult<RecordMut<'_>> {
        self.book
            .get_mut(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
    }
}
