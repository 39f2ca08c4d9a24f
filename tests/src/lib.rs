//! Integration tests driving the wrapper end to end against a stub
//! nmap executable.

#[cfg(test)]
mod end_to_end;
