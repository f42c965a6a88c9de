//! Interactive console front end.
//!
//! Reads one answer per line and writes prompts and results to a shared
//! writer. The same writer is handed to the guest's [`Customer`]
//! subscriber, so availability notifications appear inline with the
//! rest of the session.
//!
//! ```text
//! 1. Display room details     5. Check in
//! 2. Check room availability  6. Check out
//! 3. Book room                7. Cancel reservation
//! 4. Exit
//! ```

use std::cell::{Ref, RefCell};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use innforge_inventory::InventoryError;
use innforge_notify::Customer;
use innforge_room::RoomAction;

use crate::{Hotel, InnforgeError};

const MENU: &str = "\
Enter your choice:
1. Display room details
2. Check room availability
3. Book room
4. Exit
5. Check in
6. Check out
7. Cancel reservation";

// ---------------------------------------------------------------------------
// SharedOutput
// ---------------------------------------------------------------------------

/// A cloneable handle to one writer.
///
/// Each write borrows the writer only for the duration of the call.
pub struct SharedOutput<W>(Rc<RefCell<W>>);

impl<W> SharedOutput<W> {
    pub fn new(writer: W) -> Self {
        Self(Rc::new(RefCell::new(writer)))
    }

    /// Borrows the underlying writer, e.g. to inspect a `Vec<u8>` in tests.
    pub fn borrow(&self) -> Ref<'_, W> {
        self.0.borrow()
    }
}

impl<W> Clone for SharedOutput<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W: Write> Write for SharedOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// What the menu loop should do after an operation.
enum Flow {
    Continue,
    Exit,
}

/// One answer read from the guest.
enum Answer<T> {
    Given(T),
    Invalid,
    /// Input ended.
    Closed,
}

/// Drives a [`Hotel`] from a line-oriented reader.
pub struct Console<'h, R, W: Write> {
    hotel: &'h mut Hotel,
    input: R,
    output: SharedOutput<W>,
}

impl<'h, R, W> Console<'h, R, W>
where
    R: BufRead,
    W: Write + 'static,
{
    pub fn new(hotel: &'h mut Hotel, input: R, output: SharedOutput<W>) -> Self {
        Self {
            hotel,
            input,
            output,
        }
    }

    /// Runs the session until the guest exits or input ends.
    ///
    /// The guest is subscribed to notifications for the length of the
    /// session. Only I/O failures are returned as errors; everything else
    /// is reported on the console.
    pub fn run(&mut self) -> Result<(), InnforgeError> {
        writeln!(self.output, "Enter your name to subscribe to notifications:")?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };
        let customer = Customer::new(name.clone(), self.output.clone());
        let subscription = self.hotel.subscribe(Box::new(customer));
        tracing::info!(customer = %name, %subscription, "console session started");

        let result = self.menu_loop();

        self.hotel.unsubscribe(subscription);
        tracing::info!(customer = %name, "console session ended");
        result
    }

    fn menu_loop(&mut self) -> Result<(), InnforgeError> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let flow = match line.parse::<u32>() {
                Ok(1) => self.display_room_details()?,
                Ok(2) => self.check_availability()?,
                Ok(3) => self.book_room()?,
                Ok(4) => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Exit
                }
                Ok(5) => self.lifecycle(RoomAction::CheckIn)?,
                Ok(6) => self.lifecycle(RoomAction::CheckOut)?,
                Ok(7) => self.lifecycle(RoomAction::Cancel)?,
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn display_room_details(&mut self) -> Result<Flow, InnforgeError> {
        let selector = match self.prompt_selector()? {
            Answer::Given(s) => s,
            Answer::Invalid => return self.invalid_room_type(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        match self.hotel.describe(selector) {
            Ok(entry) => writeln!(self.output, "{entry}")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_availability(&mut self) -> Result<Flow, InnforgeError> {
        let selector = match self.prompt_selector()? {
            Answer::Given(s) => s,
            Answer::Invalid => return self.invalid_room_type(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        match self.hotel.check_availability(selector) {
            Ok(count) => writeln!(self.output, "Available rooms: {count}")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn book_room(&mut self) -> Result<Flow, InnforgeError> {
        let selector = match self.prompt_selector()? {
            Answer::Given(s) => s,
            Answer::Invalid => return self.invalid_room_type(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        if let Err(e) = self.hotel.check_availability(selector) {
            self.report(e)?;
            return Ok(Flow::Continue);
        }

        // Guest details are asked for but not kept.
        let mut details = Vec::with_capacity(3);
        for prompt in ["Enter customer name: ", "Enter contact number: ", "Enter gender: "] {
            writeln!(self.output, "{prompt}")?;
            match self.read_line()? {
                Some(answer) => details.push(answer),
                None => return Ok(Flow::Exit),
            }
        }
        tracing::debug!(customer = %details[0], "booking requested");

        match self.hotel.book(selector) {
            Ok(booking) => {
                writeln!(self.output, "Room booked successfully.")?;
                writeln!(
                    self.output,
                    "Room number: {} ({}, Rs.{:.2} per night)",
                    booking.room_number(),
                    booking.description,
                    booking.nightly_price
                )?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn lifecycle(&mut self, action: RoomAction) -> Result<Flow, InnforgeError> {
        let selector = match self.prompt_selector()? {
            Answer::Given(s) => s,
            Answer::Invalid => return self.invalid_room_type(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        if let Err(e) = self.hotel.check_availability(selector) {
            self.report(e)?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Enter room number:")?;
        let slot = match self.read_line()? {
            None => return Ok(Flow::Exit),
            Some(line) => match line.parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(self.output, "Invalid room number.")?;
                    return Ok(Flow::Continue);
                }
            },
        };

        match self.hotel.apply(selector, slot, action) {
            Ok(report) => writeln!(self.output, "{}", report.outcome)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_selector(&mut self) -> Result<Answer<u32>, InnforgeError> {
        writeln!(self.output, "Enter room type (1-4):")?;
        Ok(match self.read_line()? {
            None => Answer::Closed,
            Some(line) => match line.parse::<u32>() {
                Ok(selector) => Answer::Given(selector),
                Err(_) => Answer::Invalid,
            },
        })
    }

    fn invalid_room_type(&mut self) -> Result<Flow, InnforgeError> {
        writeln!(self.output, "Invalid room type.")?;
        Ok(Flow::Continue)
    }

    /// Prints the console message for a domain error. I/O errors are
    /// passed back to the caller.
    fn report(&mut self, err: InnforgeError) -> Result<(), InnforgeError> {
        if let InnforgeError::Io(_) = err {
            return Err(err);
        }
        let message = match &err {
            InnforgeError::Inventory(InventoryError::InvalidCategorySelector(_)) => {
                "Invalid room type."
            }
            InnforgeError::Inventory(InventoryError::NoCapacity(_)) => "No rooms available.",
            InnforgeError::Inventory(InventoryError::SlotOutOfRange { .. }) => {
                "Invalid room number."
            }
            InnforgeError::Inventory(InventoryError::EmptySlot { .. }) => {
                "No booking in that room."
            }
            _ => {
                tracing::warn!(error = %err, "operation failed");
                "Operation failed."
            }
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Reads one trimmed line. `None` means input has ended.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
