//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A trimmed-down tab-aligned JSON library header.
pub const OJ_HEADER: &str = r#"// Copyright (c) 2021, Peter Ohler, All rights reserved.

#ifndef OJ_H
#define OJ_H

#ifdef __cplusplus
extern "C" {
#endif

#include <stdbool.h>
#include <stdint.h>

#define OJ_VERSION	"3.1.1"
#define OJ_ERR_INIT	{ .code = 0, .line = 0, .col = 0 }

    typedef enum {
	OJ_OK		= 0,
	OJ_ERR_MEMORY	= ENOMEM,
	OJ_ERR_PARSE	= 'p',
	OJ_ERR_READ	= 'r',
    } ojStatus;

    typedef enum {
	OJ_NONE		= '\0',
	OJ_NULL		= 'n',
	OJ_TRUE		= 't',
    } ojType;

    typedef struct _ojErr {
	int		code;
	int		line;
	char		msg[256];
    } *ojErr;

    typedef struct _ojVal	*ojVal;

    typedef union _ojS4k {
	union _ojS4k	*next;
	char		str[4096];
    } *ojS4k;

    typedef struct _ojStr {
	int		len;	// length of raw
	union {
	    char		raw[120];
	    union _ojS4k	*s4k;
	};
    } *ojStr;

    typedef bool	(*ojParseCallback)(ojVal val, void *ctx);

    extern bool		oj_thread_safe;

    extern void		oj_cleanup(void);
    extern ojStatus	oj_validate_str(ojErr err, const char *json);
    extern ojVal	oj_each(ojVal val, bool (*cb)(ojVal v, void* ctx), void *ctx);
    extern ojStatus	oj_pp_parse_str(ojErr		err,
				    const char		*json,
				    ojParseCallback	cb,
				    void		*ctx);
    extern const char*	oj_status_str(ojStatus code);

#ifdef __cplusplus
}
#endif
#endif /* OJ_H */
"#;

/// Write `contents` to `relative` inside a fresh temporary directory.
///
/// The directory is returned alongside the path so the caller controls its lifetime.
pub fn write_header(relative: &str, contents: &str) -> (TempDir, PathBuf) {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(&path, contents).unwrap();
	(dir, path)
}

/// Names of a collection, in model order.
pub fn names<'a, T>(items: &'a [T], name: impl Fn(&'a T) -> &'a str) -> Vec<&'a str> {
	items.iter().map(name).collect()
}
