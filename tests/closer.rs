// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;

#[cfg(test)]
use pretty_assertions::assert_eq;
use tagwrite::closer::Closer;

fn count_up(count: &mut u32) -> Result<(), Infallible> {
    *count += 1;
    Ok(())
}

#[test]
fn test_close_runs_action_once() {
    let mut count = 0;
    {
        let mut closer: Closer<'_, u32, Infallible> = Closer::new(&mut count, count_up);
        assert!(!closer.is_closed());
        for _ in 0..5 {
            closer.close().unwrap();
        }
        assert!(closer.is_closed());
        assert_eq!(*closer, 1);
    }
    assert_eq!(count, 1);
}

#[test]
fn test_drop_runs_action() {
    let mut count = 0;
    {
        let _closer: Closer<'_, u32, Infallible> = Closer::new(&mut count, count_up);
    }
    assert_eq!(count, 1);
}

#[test]
fn test_target_reachable_through_closer() {
    let mut words = vec!["open".to_owned()];
    {
        let mut closer: Closer<'_, Vec<String>, Infallible> =
            Closer::new(&mut words, |words: &mut Vec<String>| {
                words.push("close".to_owned());
                Ok(())
            });
        closer.push("content".to_owned());
    }
    assert_eq!(words, ["open", "content", "close"]);
}

#[test]
fn test_failure_is_reported_once() {
    let mut attempts = 0;
    let mut closer: Closer<'_, u32, String> = Closer::new(&mut attempts, |attempts: &mut u32| {
        *attempts += 1;
        Err("sink gone".to_owned())
    });
    assert_eq!(closer.close(), Err("sink gone".to_owned()));
    assert_eq!(closer.close(), Ok(()));
    drop(closer);
    assert_eq!(attempts, 1);
}
