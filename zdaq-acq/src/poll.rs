//! Обёртка над poll(2) — единственная точка блокировки во всей системе.

use std::{io, os::fd::RawFd};

/// Блокируется пока хотя бы один из `fds` не станет читаемым.
///
/// Возвращает индексы готовых дескрипторов; порядок между источниками
/// ничем не гарантирован. Таймаута нет — ожидание длится сколько
/// потребуется, `EINTR` повторяется. `POLLERR`/`POLLHUP` тоже считаются
/// готовностью: последующее чтение такого источника даст короткий
/// результат и явную ошибку вместо вечного ожидания.
pub fn wait_readable(fds: &[RawFd]) -> io::Result<Vec<usize>> {
    let mut pfds: Vec<libc::pollfd> = fds
        .iter()
        .map(|&fd| libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        })
        .collect();

    loop {
        let rc = unsafe { libc::poll(pfds.as_mut_ptr(), pfds.len() as libc::nfds_t, -1) };

        if rc >= 0 {
            break;
        }

        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
        // EINTR — повторяем ожидание
    }

    let ready = pfds
        .iter()
        .enumerate()
        .filter(|(_, p)| p.revents & (libc::POLLIN | libc::POLLERR | libc::POLLHUP) != 0)
        .map(|(i, _)| i)
        .collect();

    Ok(ready)
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
